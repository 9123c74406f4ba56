mod view;
mod view_model;

pub use view::ComplianceTab;
pub use view_model::ComplianceTabVm;
