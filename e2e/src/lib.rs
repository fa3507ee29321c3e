//! End-to-end tests of `solid-web` against a mock LDP server.

#[cfg(test)]
mod tests;
