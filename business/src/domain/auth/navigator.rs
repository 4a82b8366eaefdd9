/// Sends the front-end to its login entry point after a logout.
pub trait Navigator: Send + Sync {
    fn to_login(&self);
}
