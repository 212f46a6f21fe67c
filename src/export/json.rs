use crate::export::model::SiteExport;

/// Write site rows as pretty-printed JSON.
pub(crate) fn write_json(path: &str, sites: &[SiteExport]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(sites).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}
