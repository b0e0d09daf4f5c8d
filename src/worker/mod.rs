use crate::codegen::{CodeGenerator, GeneratedArtifact};
use crate::config::GeneratorConfig;
use crate::error::{CodegenError, Result};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rayon::ThreadPool;
use rayon::prelude::*;
use std::sync::Arc;

/// Thread pool running independent generators in parallel
///
/// Generators share nothing, so the pool only has to make sure two of them do
/// not claim the same artifact identity and that the batch comes back in a
/// stable order.
#[derive(Clone)]
pub struct GenerationPool {
    pool: Arc<ThreadPool>,
}

impl GenerationPool {
    pub fn new(num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|index| format!("meshestra-codegen-{}", index))
            .build()
            .map_err(|e| CodegenError::WorkerPool(e.to_string()))?;
        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// One thread per CPU unless the config says otherwise
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        Self::new(config.worker_threads.unwrap_or_else(num_cpus::get))
    }

    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run every generator and return the artifacts sorted by identity
    ///
    /// Fails on the first generation error or on two artifacts sharing an
    /// identity; no partial batch is returned.
    #[tracing::instrument(skip_all, fields(generators = generators.len()))]
    pub fn generate_all<G>(&self, generators: &[G]) -> Result<Vec<GeneratedArtifact>>
    where
        G: CodeGenerator + Sync,
    {
        tracing::info!("Generating {} artifacts...", generators.len());
        let artifacts: DashMap<String, String> = DashMap::with_capacity(generators.len());

        let outcome = self.pool.install(|| {
            generators.par_iter().try_for_each(|generator| {
                let artifact = generator.generate()?;
                match artifacts.entry(artifact.fqn) {
                    Entry::Occupied(entry) => Err(CodegenError::DuplicateArtifact {
                        fqn: entry.key().clone(),
                    }),
                    Entry::Vacant(entry) => {
                        entry.insert(artifact.source);
                        Ok(())
                    }
                }
            })
        });

        if let Err(e) = outcome {
            tracing::error!("Generation failed: {}", e);
            return Err(e);
        }

        let mut artifacts: Vec<GeneratedArtifact> = artifacts
            .into_iter()
            .map(|(fqn, source)| GeneratedArtifact { fqn, source })
            .collect();
        artifacts.sort_by(|a, b| a.fqn.cmp(&b.fqn));

        tracing::info!("Generation complete ({} artifacts)", artifacts.len());
        Ok(artifacts)
    }
}
