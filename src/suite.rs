// ============================================================================
// suite.rs — ProjectSuite: provider map, dependency graph, order resolution
// ============================================================================
//
// Grounded on project_suite.go (NewProjectSuite / ResolveOrder /
// buildProviderMap / buildDepGraph / edgeEnds). The Go original builds the
// "consumer depends on provider" adjacency first and transposes it once to
// get a provider-before-consumer graph before calling Topological(); this
// crate keeps that exact two-step construction.
// ============================================================================

use std::collections::HashMap;

use crate::error::{DependencyCycle, Error};
use crate::graph::DepGraph;
use crate::identity::RequirementIdentity;
use crate::log_sink::{LogLevel, LogSink};
use crate::ordered::OrderedProjectSuite;
use crate::project::{Project, ProjectInfo};

pub struct ProjectSuite {
    projects: Vec<Box<dyn Project>>,
}

impl ProjectSuite {
    /// Takes ownership of a defensive copy of the project sequence.
    pub fn new(projects: Vec<Box<dyn Project>>) -> Self {
        ProjectSuite { projects }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Resolves a build order. Logs missing providers to `log` (not to a
    /// process-wide logger) so tests can assert on them without capturing
    /// stdout.
    pub fn resolve_order(self, log: &mut dyn LogSink) -> Result<OrderedProjectSuite, Error> {
        let providers = self.build_provider_map()?;
        let consumes_graph = self.build_consumes_graph(&providers, log);
        let depends_graph = consumes_graph.transpose();

        match depends_graph.topological_order() {
            Ok(order) => Ok(OrderedProjectSuite::new(self.projects, depends_graph, order)),
            Err(cycle_indices) => {
                let cycle_projects: Vec<ProjectInfo> = cycle_indices
                    .into_iter()
                    .map(|i| self.projects[i].info())
                    .collect();
                Err(Error::DependencyCycle(DependencyCycle::new(cycle_projects)))
            }
        }
    }

    /// Maps each produced RequirementIdentity to the unique index of the
    /// project that produces it. A project may list the same identity
    /// multiple times in its own builds() (idempotent); two different
    /// projects producing the same identity is a fatal error (I1).
    fn build_provider_map(&self) -> Result<HashMap<RequirementIdentity, usize>, Error> {
        let mut providers: HashMap<RequirementIdentity, usize> = HashMap::new();
        for (i, project) in self.projects.iter().enumerate() {
            for built in project.builds() {
                match providers.get(&built.id) {
                    Some(&prev) if prev != i => {
                        return Err(Error::DuplicateProvider {
                            identity: built.id,
                            first: self.projects[prev].info().name,
                            second: self.projects[i].info().name,
                        });
                    }
                    _ => {
                        providers.insert(built.id, i);
                    }
                }
            }
        }
        Ok(providers)
    }

    /// Builds the "consumer -> provider" graph: adjacency[i] holds the
    /// provider index for each of project i's consumed requirements that
    /// has a known provider in this suite. Unmatched requirements are
    /// treated as externally satisfied and logged (I2), not errored.
    fn build_consumes_graph(
        &self,
        providers: &HashMap<RequirementIdentity, usize>,
        log: &mut dyn LogSink,
    ) -> DepGraph {
        let mut graph = DepGraph::new(self.projects.len());
        for (i, project) in self.projects.iter().enumerate() {
            for requirement in project.uses() {
                let id = requirement.id();
                match providers.get(&id) {
                    Some(&provider_index) => graph.add_edge(i, provider_index),
                    None => log.line(None, LogLevel::Info, &format!("no provider for {}", id)),
                }
            }
        }
        graph
    }
}
