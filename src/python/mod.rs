//! Python bindings for the Flip 7 score engine.
//!
//! # Quick Start
//!
//! ```python
//! import flip7_score as f7
//!
//! store = f7.Flip7Store()
//! game = store.create_game()
//! alice = store.add_player(game, "Alice")
//! bob = store.add_player(game, "Bob")
//! store.start_game(game)
//!
//! store.add_card(game, alice, "7")
//! store.add_card(game, alice, "x2")
//! store.new_round(game)
//!
//! snapshot = store.snapshot_json()
//! ```

use pyo3::prelude::*;

mod py_store;

pub use py_store::*;

/// flip7_score: score tracking for Flip 7.
#[pymodule]
fn flip7_score(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyFlip7Store>()?;
    m.add_function(wrap_pyfunction!(round_score, m)?)?;
    m.add_function(wrap_pyfunction!(card_label, m)?)?;
    Ok(())
}
