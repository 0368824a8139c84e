// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod reducer;

pub use reducer::Reducer;
