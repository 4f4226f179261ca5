mod passthrough_tests;
mod support;
