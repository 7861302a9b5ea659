//! Independent builds of many definitions.

use bpd_core::BehaviorProviderDefinition;

use crate::{GraphBuilder, GraphConfig, GraphModel, GraphResult};

/// Build one graph per definition, returning results in input order.
///
/// A failing definition never affects the others.  With the `parallel`
/// feature the definitions are distributed over Rayon's thread pool.
pub fn build_graphs(
    defs:   &[BehaviorProviderDefinition],
    config: &GraphConfig,
) -> Vec<GraphResult<GraphModel>> {
    let builder = GraphBuilder::new(config.clone());

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        defs.par_iter().map(|def| builder.build(def)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        defs.iter().map(|def| builder.build(def)).collect()
    }
}
