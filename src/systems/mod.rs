pub(crate) mod submission;
