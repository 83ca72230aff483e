//! Build flavours
//!
//! Classic freestyle builds record a single change log; workflow runs record
//! one per checkout. Both are served through [`Run`].

use crate::types::{BuildRef, ChangeLogSet, Fingerprint, FingerprintRecord};
use serde::{Deserialize, Serialize};

/// Capabilities shared by every build flavour
pub trait Run {
    /// Identity of this build
    fn build_ref(&self) -> BuildRef;

    /// Change-log sets, zero or more
    fn change_sets(&self) -> Vec<&ChangeLogSet>;

    /// Mutable access to the change-log sets
    fn change_sets_mut(&mut self) -> Vec<&mut ChangeLogSet>;

    /// Raw fingerprints, `None` when the build did not fingerprint anything
    fn fingerprints(&self) -> Option<&[Fingerprint]>;

    /// Fingerprint record owned by this build
    fn fingerprint_record(&self) -> Option<FingerprintRecord> {
        self.fingerprints().map(|fingerprints| FingerprintRecord {
            owner: self.build_ref(),
            fingerprints: fingerprints.to_vec(),
        })
    }

    /// Point every change entry back at this build
    fn stamp_change_owner(&mut self) {
        let owner = self.build_ref();
        for set in self.change_sets_mut() {
            for entry in &mut set.entries {
                entry.parent = Some(owner.clone());
            }
        }
    }
}

/// A classic build with at most one change log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreestyleBuild {
    /// Job name
    pub job: String,
    /// Build number within the job
    pub number: u32,
    /// Change log, absent when the build had no SCM checkout
    #[serde(default)]
    pub change_set: Option<ChangeLogSet>,
    /// Recorded fingerprints, absent when fingerprinting was off
    #[serde(default)]
    pub fingerprints: Option<Vec<Fingerprint>>,
}

/// A pipeline run with one change log per checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRun {
    /// Job name
    pub job: String,
    /// Run number within the job
    pub number: u32,
    /// One change log per checkout, in checkout order
    #[serde(default)]
    pub change_sets: Vec<ChangeLogSet>,
    /// Recorded fingerprints, absent when fingerprinting was off
    #[serde(default)]
    pub fingerprints: Option<Vec<Fingerprint>>,
}

impl Run for FreestyleBuild {
    fn build_ref(&self) -> BuildRef {
        BuildRef::new(self.job.clone(), self.number)
    }

    fn change_sets(&self) -> Vec<&ChangeLogSet> {
        self.change_set.iter().collect()
    }

    fn change_sets_mut(&mut self) -> Vec<&mut ChangeLogSet> {
        self.change_set.iter_mut().collect()
    }

    fn fingerprints(&self) -> Option<&[Fingerprint]> {
        self.fingerprints.as_deref()
    }
}

impl Run for WorkflowRun {
    fn build_ref(&self) -> BuildRef {
        BuildRef::new(self.job.clone(), self.number)
    }

    fn change_sets(&self) -> Vec<&ChangeLogSet> {
        self.change_sets.iter().collect()
    }

    fn change_sets_mut(&mut self) -> Vec<&mut ChangeLogSet> {
        self.change_sets.iter_mut().collect()
    }

    fn fingerprints(&self) -> Option<&[Fingerprint]> {
        self.fingerprints.as_deref()
    }
}

/// Any build flavour, as stored in a history snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BuildRecord {
    /// Classic build
    Freestyle(FreestyleBuild),
    /// Pipeline run
    Workflow(WorkflowRun),
}

impl BuildRecord {
    fn as_run(&self) -> &dyn Run {
        match self {
            Self::Freestyle(b) => b,
            Self::Workflow(r) => r,
        }
    }

    fn as_run_mut(&mut self) -> &mut dyn Run {
        match self {
            Self::Freestyle(b) => b,
            Self::Workflow(r) => r,
        }
    }
}

impl Run for BuildRecord {
    fn build_ref(&self) -> BuildRef {
        self.as_run().build_ref()
    }

    fn change_sets(&self) -> Vec<&ChangeLogSet> {
        self.as_run().change_sets()
    }

    fn change_sets_mut(&mut self) -> Vec<&mut ChangeLogSet> {
        self.as_run_mut().change_sets_mut()
    }

    fn fingerprints(&self) -> Option<&[Fingerprint]> {
        self.as_run().fingerprints()
    }
}

impl From<FreestyleBuild> for BuildRecord {
    fn from(build: FreestyleBuild) -> Self {
        Self::Freestyle(build)
    }
}

impl From<WorkflowRun> for BuildRecord {
    fn from(run: WorkflowRun) -> Self {
        Self::Workflow(run)
    }
}
