//! JSON encoding of [`Graph`] values.

use std::path::Path;

use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};

use crate::error::KgResult;
use crate::types::Graph;

/// Serialize a graph as pretty-printed JSON.
pub fn to_json_string(graph: &Graph) -> KgResult<String> {
    Ok(serde_json::to_string_pretty(graph)?)
}

/// Parse a graph from JSON. Missing cluster maps default to empty.
pub fn from_json_str(json: &str) -> KgResult<Graph> {
    Ok(serde_json::from_str(json)?)
}

/// Write a graph as JSON to an async writer.
pub async fn write_graph<W>(graph: &Graph, writer: W) -> KgResult<()>
where
    W: AsyncWrite + Unpin,
{
    let json = to_json_string(graph)?;
    let mut writer = BufWriter::new(writer);
    writer.write_all(json.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

/// Save a graph to `path`, creating parent directories as needed.
pub async fn save_graph(graph: &Graph, path: impl AsRef<Path>) -> KgResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let file = tokio::fs::File::create(path).await?;
    write_graph(graph, file).await?;

    tracing::info!(
        path = %path.display(),
        entities = graph.entities.len(),
        edges = graph.edges.len(),
        relations = graph.relations.len(),
        "Saved graph"
    );
    Ok(())
}

/// Load a graph from `path`.
pub async fn load_graph(path: impl AsRef<Path>) -> KgResult<Graph> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path).await?;
    let graph = from_json_str(&content)?;

    tracing::debug!(
        path = %path.display(),
        entities = graph.entities.len(),
        relations = graph.relations.len(),
        "Loaded graph"
    );
    Ok(graph)
}
