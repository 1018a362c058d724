pub mod project_builder;
