//! Shows the trace events a predicate gate emits when it ends a generation.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example tracing_demo --features tracing
//! ```

use eddy::generator::{from_iterator, GeneratorExt};
use eddy::predicate::lt;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    // The gate trips on 5; a trace event marks the stop.
    let prefix = from_iterator(1..=10).generate_while(lt(5)).to_vec();
    println!("emitted prefix: {prefix:?}");

    // Guard-first reading of the same pipeline, same trace point.
    let guarded = eddy::generator::WhileGenerate::new(lt(8), from_iterator(1..=10));
    println!("guarded prefix: {:?}", guarded.to_vec());
}
