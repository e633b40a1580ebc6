use crate::{
    models::{GroupedTitles, TitleRecord},
    services::normalizer::ServiceNormalizer,
};

/// Partitions records by subscribed service
///
/// Records whose provider label does not normalize are dropped. Input order is
/// preserved within each service.
pub fn group_by_service<I>(normalizer: &ServiceNormalizer, records: I) -> GroupedTitles
where
    I: IntoIterator<Item = TitleRecord>,
{
    let mut grouped = GroupedTitles::new();

    for record in records {
        let service = normalizer
            .normalize(record.streaming_service.as_deref())
            .cloned();

        match service {
            Some(service) => grouped.entry(service).or_default().push(record),
            None => tracing::debug!(
                id = ?record.id,
                provider = ?record.streaming_service,
                "Dropping title from unsubscribed service"
            ),
        }
    }

    grouped
}

/// Number of titles across all services
pub fn total_titles(grouped: &GroupedTitles) -> usize {
    grouped.values().map(Vec::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceName;

    fn record(id: u64, provider: Option<&str>) -> TitleRecord {
        TitleRecord {
            id: Some(id),
            streaming_service: provider.map(str::to_string),
            title: Some(format!("Title {}", id)),
            ..Default::default()
        }
    }

    #[test]
    fn test_groups_subscribed_and_drops_others() {
        let grouped = group_by_service(
            &ServiceNormalizer::default(),
            vec![
                record(1, Some("Netflix")),
                record(2, Some("HBO Max Amazon Channel")),
                record(3, Some("SomeObscureService")),
            ],
        );

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[&ServiceName::new("Netflix")].len(), 1);
        assert_eq!(grouped[&ServiceName::new("HBO Max")].len(), 1);
        assert_eq!(total_titles(&grouped), 2);
    }

    #[test]
    fn test_preserves_input_order_within_service() {
        let grouped = group_by_service(
            &ServiceNormalizer::default(),
            vec![
                record(1, Some("Max")),
                record(2, Some("Hulu")),
                record(3, Some("HBO Max")),
                record(4, Some("Max Amazon Channel")),
            ],
        );

        let ids: Vec<_> = grouped[&ServiceName::new("HBO Max")]
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![Some(1), Some(3), Some(4)]);
    }

    #[test]
    fn test_missing_provider_is_dropped() {
        let grouped = group_by_service(
            &ServiceNormalizer::default(),
            vec![record(1, None), record(2, Some(""))],
        );
        assert!(grouped.is_empty());
        assert_eq!(total_titles(&grouped), 0);
    }

    #[test]
    fn test_each_record_lands_in_exactly_one_group() {
        let records: Vec<_> = ["Netflix", "Apple TV+", "Disney+", "Peacock", "Unknown"]
            .iter()
            .enumerate()
            .map(|(i, label)| record(i as u64, Some(label)))
            .collect();

        let grouped = group_by_service(&ServiceNormalizer::default(), records);

        for id in 0..4u64 {
            let hits = grouped
                .values()
                .flatten()
                .filter(|r| r.id == Some(id))
                .count();
            assert_eq!(hits, 1, "record {} grouped {} times", id, hits);
        }
        assert_eq!(total_titles(&grouped), 4);
    }
}
