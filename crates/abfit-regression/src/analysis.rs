//! Series-level orchestration
//!
//! Computes the statistics of a [`PairedSeries`] once, then fits every
//! method in a [`RegressionCatalog`] and caches the results keyed by the
//! descriptor id. A method that is degenerate for this data is simply left
//! out of the map; partial results are valid and expected.

use crate::catalog::{MethodDescriptor, RegressionCatalog};
use crate::types::{RegressionResult, RegressionType};
use abfit_core::{PairedSeries, SampleStatistics};
use log::debug;
use std::collections::HashMap;

/// The fits and statistics computed for one series.
///
/// An empty series yields no statistics and an empty fit map, without
/// erroring; callers render nothing in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesAnalysis {
    stats: Option<SampleStatistics>,
    fits: HashMap<String, RegressionResult>,
}

impl SeriesAnalysis {
    /// Fit every catalog method to the series under one regression policy.
    pub fn compute(
        series: &PairedSeries,
        catalog: &RegressionCatalog,
        regression: RegressionType,
    ) -> Self {
        let stats = match SampleStatistics::compute(series) {
            Ok(stats) => stats,
            Err(err) => {
                debug!("series statistics unavailable: {err}");
                return Self {
                    stats: None,
                    fits: HashMap::new(),
                };
            }
        };

        let mut fits = HashMap::with_capacity(catalog.len());
        for descriptor in catalog.all() {
            match descriptor.kind.fit(&stats, regression) {
                Ok(fit) => {
                    debug!("regression {}: {fit}", descriptor.id);
                    fits.insert(descriptor.id.clone(), fit);
                }
                Err(err) => {
                    debug!("skipping regression {}: {err}", descriptor.id);
                }
            }
        }

        Self {
            stats: Some(stats),
            fits,
        }
    }

    /// Statistics of the underlying series, `None` for an empty series.
    pub fn stats(&self) -> Option<&SampleStatistics> {
        self.stats.as_ref()
    }

    /// The fit computed for a method id, if that method was registered and
    /// not degenerate for this data.
    pub fn get(&self, method_id: &str) -> Option<&RegressionResult> {
        self.fits.get(method_id)
    }

    /// All computed fits keyed by method id.
    pub fn fits(&self) -> &HashMap<String, RegressionResult> {
        &self.fits
    }

    /// Number of methods that produced a fit.
    pub fn len(&self) -> usize {
        self.fits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fits.is_empty()
    }

    /// Iterate fits in the catalog's enumeration order, skipping methods
    /// that were omitted as degenerate.
    pub fn in_catalog_order<'a>(
        &'a self,
        catalog: &'a RegressionCatalog,
    ) -> impl Iterator<Item = (&'a MethodDescriptor, &'a RegressionResult)> {
        catalog
            .all()
            .iter()
            .filter_map(move |descriptor| self.fits.get(&descriptor.id).map(|fit| (descriptor, fit)))
    }
}
