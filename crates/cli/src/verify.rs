//! Self test against known vectors.

use std::fmt;

use tracing::{debug, info, warn};
use wordecc_core::{DataWord, Ecc, Encoder};

use crate::vectors::TestVector;

const RULE_WIDTH: usize = 65;

const GREEN: &str = "\x1b[92m";
const RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

/// Outcome of a single test vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pass,
    Fail,
}

impl Status {
    fn color(&self) -> &'static str {
        match self {
            Status::Pass => GREEN,
            Status::Fail => RED,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pass => write!(f, "PASS"),
            Status::Fail => write!(f, "FAIL"),
        }
    }
}

/// Result of encoding one test vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseResult {
    pub data: DataWord,
    pub expected: Ecc,
    pub calculated: Ecc,
}

impl CaseResult {
    pub fn status(&self) -> Status {
        if self.expected == self.calculated {
            Status::Pass
        } else {
            Status::Fail
        }
    }
}

/// Results of a self test run.
#[derive(Debug, Clone, Default)]
pub struct VerificationReport {
    results: Vec<CaseResult>,
}

impl VerificationReport {
    /// Returns the per-vector results in the order they were run.
    pub fn results(&self) -> &[CaseResult] {
        &self.results
    }

    /// Returns the number of vectors that passed.
    pub fn passed(&self) -> usize {
        self.results
            .iter()
            .filter(|result| result.status() == Status::Pass)
            .count()
    }

    /// Returns the number of vectors that failed.
    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    /// Returns `true` if every vector passed.
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Returns a displayable rendering of the report.
    pub fn display(&self, color: bool) -> ReportDisplay<'_> {
        ReportDisplay {
            report: self,
            color,
        }
    }
}

/// Text rendering of a [`VerificationReport`].
pub struct ReportDisplay<'a> {
    report: &'a VerificationReport,
    color: bool,
}

impl ReportDisplay<'_> {
    fn paint(
        &self,
        f: &mut fmt::Formatter<'_>,
        code: &str,
        text: &dyn fmt::Display,
    ) -> fmt::Result {
        if self.color {
            write!(f, "{code}{text}{RESET}")
        } else {
            write!(f, "{text}")
        }
    }
}

impl fmt::Display for ReportDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Running ECC Verification ---")?;
        for result in self.report.results() {
            let status = result.status();
            write!(
                f,
                "Data: 0x{} | Expected: 0x{} | Calculated: 0x{} -> ",
                result.data, result.expected, result.calculated
            )?;
            self.paint(f, status.color(), &status)?;
            writeln!(f)?;
        }

        let rule = "-".repeat(RULE_WIDTH);
        writeln!(f, "{rule}")?;
        if self.report.all_passed() {
            self.paint(f, GREEN, &"All test cases passed successfully!")?;
        } else {
            let summary = format!(
                "{} of {} test cases failed. Please check the matrix and logic.",
                self.report.failed(),
                self.report.results().len()
            );
            self.paint(f, RED, &summary)?;
        }
        writeln!(f)?;
        writeln!(f, "{rule}")
    }
}

/// Encodes every vector and compares against its expected ECC.
///
/// A mismatch is recorded and the run continues with the next vector.
pub fn verify<'a, I>(encoder: &Encoder, vectors: I) -> VerificationReport
where
    I: IntoIterator<Item = &'a TestVector>,
{
    let results: Vec<CaseResult> = vectors
        .into_iter()
        .map(|vector| {
            let result = CaseResult {
                data: vector.data,
                expected: vector.ecc,
                calculated: encoder.encode(vector.data),
            };
            match result.status() {
                Status::Pass => debug!(data = %result.data, ecc = %result.calculated, "pass"),
                Status::Fail => warn!(
                    data = %result.data,
                    expected = %result.expected,
                    calculated = %result.calculated,
                    "ecc mismatch"
                ),
            }
            result
        })
        .collect();

    let report = VerificationReport { results };
    info!(
        total = report.results().len(),
        passed = report.passed(),
        failed = report.failed(),
        "verification finished"
    );

    report
}
