// Module Definition
pub mod controller; // Load -> sequential pass -> parallel pass
pub mod kernels; // Counting kernels, single and multi-threaded
pub mod loader;
pub mod partition;
pub mod primality;
pub mod report;
