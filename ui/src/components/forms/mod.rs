pub mod competence_select;

pub use competence_select::CompetenceSelect;
