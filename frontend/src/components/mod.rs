pub mod header;
pub mod name_form;
pub mod name_list_panel;
pub mod selected_panel;

pub use header::Header;
pub use name_form::NameForm;
pub use name_list_panel::NameListPanel;
pub use selected_panel::SelectedPanel;
