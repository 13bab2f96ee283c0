use ferrous_records_domain::{top_level_domain, DomainError, TldCount, TldGroup};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::RecordRepository;

pub struct GetTldReportUseCase {
    repo: Arc<dyn RecordRepository>,
}

impl GetTldReportUseCase {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    /// Record count per TLD, largest first, ties broken alphabetically.
    ///
    /// Names without a dot are counted under the empty-string TLD.
    #[instrument(skip(self))]
    pub async fn counts(&self) -> Result<Vec<TldCount>, DomainError> {
        let domains = self.repo.get_domains().await?;

        let mut counts: HashMap<String, u64> = HashMap::new();
        for domain in &domains {
            *counts.entry(top_level_domain(domain)).or_insert(0) += 1;
        }

        let mut result: Vec<TldCount> = counts
            .into_iter()
            .map(|(tld, count)| TldCount { tld, count })
            .collect();
        result.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tld.cmp(&b.tld)));

        Ok(result)
    }

    /// Records grouped under their TLD, TLDs alphabetical, records in insertion order.
    #[instrument(skip(self))]
    pub async fn groups(&self) -> Result<Vec<TldGroup>, DomainError> {
        let records = self.repo.get_all().await?;

        let mut groups: BTreeMap<String, Vec<_>> = BTreeMap::new();
        for record in records {
            groups
                .entry(top_level_domain(&record.domain))
                .or_default()
                .push(record);
        }

        Ok(groups
            .into_iter()
            .map(|(tld, records)| TldGroup { tld, records })
            .collect())
    }
}
