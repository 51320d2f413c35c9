mod dashboard;
pub use dashboard::{DashboardProps, DashboardView};

mod login;
pub use login::LoginView;

mod note_form;
pub use note_form::{AddNoteView, UpdateNoteProps, UpdateNoteView};

mod register;
pub use register::RegisterView;
