use crate::core::{NodeKey, Relation};
use crate::pipeline::{implementers_by_interface, AnalysisReport, Slide};
use colored::*;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_header()?;
        self.write_summary(report)?;
        self.write_hubs(report)?;
        for slide in &report.slides {
            self.write_slide(report, slide)?;
        }
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Interface Implementation Map".bold().blue())?;
        writeln!(self.writer, "{}", "============================".blue())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let stats = &report.stats;
        writeln!(self.writer, "{}", "Summary:".bold())?;
        writeln!(self.writer, "  Interfaces: {}", stats.interfaces)?;
        writeln!(self.writer, "  Types: {}", stats.types)?;
        writeln!(
            self.writer,
            "  Relations: {} ({} via pointer)",
            stats.relations, stats.pointer_relations
        )?;
        writeln!(self.writer, "  Slides: {}", stats.slides)?;
        if stats.pruned_nodes > 0 {
            writeln!(self.writer, "  Orphans pruned: {}", stats.pruned_nodes)?;
        }
        if stats.unplaced_relations > 0 {
            writeln!(
                self.writer,
                "  Relations on no slide: {}",
                stats.unplaced_relations
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_hubs(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let hubs = report.hub_keys();
        if hubs.is_empty() {
            return Ok(());
        }
        let implementers = implementers_by_interface(&report.relations);
        writeln!(self.writer, "{} ({}):", "Hubs".bold(), hubs.len())?;
        for key in hubs {
            let count = implementers.get(key).map_or(0, Vec::len);
            writeln!(
                self.writer,
                "  {} ({} implementers)",
                key.to_string().yellow(),
                count
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_slide(&mut self, report: &AnalysisReport, slide: &Slide) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} {}: {}",
            "Slide".bold().cyan(),
            slide.index + 1,
            slide.group.title
        )?;

        let projection = &slide.projection;
        writeln!(self.writer, "  Interfaces:")?;
        for key in &projection.interfaces {
            let marker = if slide.group.is_true_hub(key) { " [hub]" } else { "" };
            writeln!(
                self.writer,
                "    {}{}",
                node_label(report, key).green(),
                marker.dimmed()
            )?;
        }

        writeln!(self.writer, "  Types:")?;
        for key in &projection.types {
            writeln!(self.writer, "    {}", node_label(report, key))?;
        }

        if !projection.relations.is_empty() {
            writeln!(self.writer, "  Relations:")?;
            for relation in &projection.relations {
                writeln!(self.writer, "    {}", relation_label(relation))?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn node_label(report: &AnalysisReport, key: &NodeKey) -> String {
    match report.display_id_of(key) {
        Some(id) => format!("{key} ({id})"),
        None => key.to_string(),
    }
}

fn relation_label(relation: &Relation) -> String {
    let receiver = if relation.via_pointer {
        format!("*{}", relation.type_key.name)
    } else {
        relation.type_key.name.clone()
    };
    format!("{} -> {}", receiver, relation.interface_key)
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
