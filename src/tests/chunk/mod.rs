//! Chunk and Buffer tests.

mod buffer_tests;
