mod layout;
mod support;
mod volume;
