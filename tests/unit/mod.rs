mod presentation;
mod utils;
