//! Unit tests for the task module.

mod vocabulary_tests;
