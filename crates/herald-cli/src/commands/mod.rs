pub mod dispatch;
pub mod generate;
pub mod ontology;
pub mod revalidate;
pub mod validate;
