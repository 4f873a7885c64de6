mod box_office;
pub use box_office::BoxOfficePage;
