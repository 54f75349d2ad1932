pub mod category_form;
pub mod evaluation_grid;
pub mod sidebar;
pub mod student_detail;
