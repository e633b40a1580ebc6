//! Catalog GraphQL documents

pub const NEW_TITLES_OPERATION: &str = "GetNewTitles";

/// Paged listing of titles newly added to streaming services
pub const NEW_TITLES_QUERY: &str = r#"
query GetNewTitles($country: Country!, $date: Date!, $language: Language!, $filter: TitleFilter, $after: String, $first: Int! = 10, $priceDrops: Boolean!, $bucketType: NewDateRangeBucket, $pageType: NewPageType! = NEW, $platform: Platform!) {
  newTitles(
    country: $country
    date: $date
    filter: $filter
    after: $after
    first: $first
    priceDrops: $priceDrops
    bucketType: $bucketType
    pageType: $pageType
  ) {
    totalCount
    edges {
      cursor
      watchNowOffer: newOffer(platform: $platform) {
        package {
          clearName
        }
      }
      node {
        __typename
        ... on MovieOrSeason {
          id
          objectId
          objectType
          content(country: $country, language: $language) {
            title
            shortDescription
            scoring {
              imdbVotes
              imdbScore
              tmdbPopularity
              tmdbScore
              tomatoMeter
              certifiedFresh
            }
            runtime
            genres {
              translation(language: $language)
            }
            ... on SeasonContent {
              seasonNumber
            }
            isReleased
          }
          ... on Season {
            show {
              id
              objectId
              objectType
              content(country: $country, language: $language) {
                title
              }
            }
          }
        }
      }
    }
    pageInfo {
      endCursor
      hasPreviousPage
      hasNextPage
    }
  }
}
"#;
