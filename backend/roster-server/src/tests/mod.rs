mod api;
mod stubs;
