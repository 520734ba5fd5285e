pub mod local_backend;
