/// The single managed entity. `id` is assigned by the database on insert and
/// never taken from a request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Post {
    pub(crate) id: i32,
    pub(crate) user_id: i32,
    pub(crate) title: String,
    pub(crate) content: String,
}
