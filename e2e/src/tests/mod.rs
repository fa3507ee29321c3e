mod put;
mod utils;
