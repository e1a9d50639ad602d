use super::User;

#[derive(Debug, Clone)]
pub enum Action {
    Submit(String),
    AuthChanged(Option<User>),
}
