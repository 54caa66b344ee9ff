//! The ingest, transform, tokens and analyze stages.

use figura_analyze::{AnalysisReport, ComponentAnalyzer};
use figura_codegen::{ComponentTransformer, TransformOutcome, TransformedComponent, TransformFailure};
use figura_core::{AliasTable, DesignDocument, DesignTree};
use figura_tokens::{extract_tokens, DesignTokenCatalog};
use serde::Serialize;
use tracing::{info, info_span};

use crate::config::PipelineConfig;
use crate::error::Result;

/// A validated tree and the aliases collected while building it.
#[derive(Debug, Clone)]
pub struct Ingested {
    pub tree: DesignTree,
    pub aliases: AliasTable,
}

/// Every artifact produced for one tree.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineOutput {
    /// One entry per root, in root order.
    pub components: Vec<TransformOutcome>,
    pub tokens: DesignTokenCatalog,
    pub report: AnalysisReport,
}

impl PipelineOutput {
    pub fn generated(&self) -> impl Iterator<Item = &TransformedComponent> {
        self.components.iter().filter_map(TransformOutcome::component)
    }

    pub fn failures(&self) -> impl Iterator<Item = &TransformFailure> {
        self.components.iter().filter_map(TransformOutcome::failure)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs the stages with one configuration.
///
/// The three consumers only read the ingested tree, so one pipeline can
/// serve any number of trees.
pub struct Pipeline {
    config: PipelineConfig,
    transformer: ComponentTransformer<'static>,
    analyzer: ComponentAnalyzer,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let transformer = ComponentTransformer::new(config.transform.clone())?;
        let analyzer = ComponentAnalyzer::new(config.analysis.clone());
        Ok(Self {
            config,
            transformer,
            analyzer,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Decode JSON and validate it into a tree.
    pub fn ingest(&self, json: &str) -> Result<Ingested> {
        let _span = info_span!("ingest", bytes = json.len()).entered();
        let document = DesignDocument::from_json_str(json)?;
        self.ingest_document(document)
    }

    pub fn ingest_document(&self, document: DesignDocument) -> Result<Ingested> {
        let (tree, aliases) = DesignTree::from_document(document, &self.config.limits)?;
        info!(
            nodes = tree.len(),
            roots = tree.roots().len(),
            aliases = aliases.len(),
            "Ingested design tree"
        );
        Ok(Ingested { tree, aliases })
    }

    /// Generate one component per root. Failed roots become failure records.
    pub fn transform(&self, ingested: &Ingested) -> Vec<TransformOutcome> {
        let _span = info_span!("transform", dialect = self.config.transform.dialect.name()).entered();
        let outcomes = self
            .transformer
            .transform_roots(&ingested.tree, &ingested.aliases);
        let failed = outcomes.iter().filter(|o| !o.is_generated()).count();
        info!(
            components = outcomes.len() - failed,
            failed,
            "Transformed roots"
        );
        outcomes
    }

    pub fn tokens(&self, tree: &DesignTree) -> DesignTokenCatalog {
        let _span = info_span!("tokens").entered();
        let catalog = extract_tokens(tree);
        info!(
            colors = catalog.colors.len(),
            typography = catalog.typography.len(),
            spacing = catalog.spacing.len(),
            shadows = catalog.shadows.len(),
            borders = catalog.borders.len(),
            radii = catalog.radii.len(),
            "Extracted tokens"
        );
        catalog
    }

    pub fn analyze(&self, tree: &DesignTree) -> AnalysisReport {
        let _span = info_span!("analyze").entered();
        let report = self.analyzer.analyze(tree);
        info!(
            components = report.overview.component_count,
            issues = report.accessibility.len(),
            recommendations = report.recommendations.len(),
            "Analyzed tree"
        );
        report
    }

    /// Ingest `json` and run every consumer on it.
    pub fn run(&self, json: &str) -> Result<PipelineOutput> {
        let ingested = self.ingest(json)?;
        Ok(PipelineOutput {
            components: self.transform(&ingested),
            tokens: self.tokens(&ingested.tree),
            report: self.analyze(&ingested.tree),
        })
    }
}
