use super::*;

pub(crate) fn write_csv(
  path: &Path,
  expansion: Expansion,
  records: &[CommentRecord],
) -> Result {
  let mut writer = csv::Writer::from_path(path)
    .with_context(|| format!("could not create {}", path.display()))?;

  writer.write_record(expansion.columns())?;

  for record in records {
    writer.write_record(record.row(expansion))?;
  }

  writer
    .flush()
    .with_context(|| format!("could not write {}", path.display()))?;

  Ok(())
}
