pub mod correlation_context;
