/*!
 * Monitoring Module
 * Log initialization
 */

pub mod tracer;

pub use tracer::init_tracing;
