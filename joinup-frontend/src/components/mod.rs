mod activity_list;
mod signup_form;
mod status;
mod toolbar;

pub use self::{activity_list::*, signup_form::*, status::*, toolbar::*};
