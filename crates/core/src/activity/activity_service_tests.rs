#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::activity::{ActivityFetchError, ActivityService, ACTIVITY_WINDOW};
    use crate::address::SuiAddress;
    use crate::metadata::MetadataCache;
    use crate::rpc::{RpcError, RpcTransport, SuiReadApi};

    const WALLET: &str = "0xabc";
    const SUI: &str = "0x2::sui::SUI";
    const USDC: &str = "0xa::usdc::USDC";

    // --- Mock transport ---

    struct MockTransport {
        history: Result<Value, String>,
    }

    impl MockTransport {
        fn new(transactions: Value) -> Self {
            Self {
                history: Ok(json!({
                    "data": transactions,
                    "nextCursor": null,
                    "hasNextPage": false,
                })),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                history: Err(message.to_string()),
            }
        }
    }

    #[async_trait]
    impl RpcTransport for MockTransport {
        async fn call(&self, method: &str, _params: Vec<Value>) -> Result<Value, RpcError> {
            match method {
                "suix_queryTransactionBlocks" => match &self.history {
                    Ok(value) => Ok(value.clone()),
                    Err(message) => Err(RpcError::Transport(message.clone())),
                },
                // Metadata resolution may run for display formatting; an
                // unregistered coin falls back to decimals = 0.
                "suix_getCoinMetadata" => Ok(Value::Null),
                other => panic!("unexpected method {other}"),
            }
        }
    }

    fn service(transport: MockTransport) -> ActivityService {
        let api = Arc::new(SuiReadApi::new(Arc::new(transport)));
        ActivityService::new(api, Arc::new(MetadataCache::new()))
    }

    fn address() -> SuiAddress {
        SuiAddress::parse(WALLET).unwrap()
    }

    fn coin_types(types: &[&str]) -> HashSet<String> {
        types.iter().map(|t| t.to_string()).collect()
    }

    fn tx(digest: &str, timestamp_ms: i64, changes: Value) -> Value {
        json!({
            "digest": digest,
            "timestampMs": timestamp_ms.to_string(),
            "balanceChanges": changes,
        })
    }

    fn change(coin_type: &str, amount: &str) -> Value {
        json!({
            "owner": {"AddressOwner": WALLET},
            "coinType": coin_type,
            "amount": amount,
        })
    }

    // --- Tests ---

    #[tokio::test]
    async fn groups_by_coin_type_and_sorts_newest_first() {
        let transport = MockTransport::new(json!([
            tx("digest-old", 1_000, json!([change(SUI, "5")])),
            tx("digest-new", 3_000, json!([change(SUI, "-2")])),
            tx("digest-mid", 2_000, json!([change(USDC, "7")])),
        ]));
        let activity = service(transport)
            .get_activity(&address(), &coin_types(&[SUI, USDC]))
            .await
            .unwrap();

        let sui = &activity[SUI];
        let digests: Vec<&str> = sui.entries.iter().map(|e| e.event.digest.as_str()).collect();
        assert_eq!(digests, vec!["digest-new", "digest-old"]);
        assert_eq!(sui.entries[0].event.delta, -2);
        assert_eq!(activity[USDC].entries.len(), 1);
    }

    #[tokio::test]
    async fn equal_timestamps_order_by_digest() {
        let transport = MockTransport::new(json!([
            tx("bbb", 1_000, json!([change(SUI, "1")])),
            tx("aaa", 1_000, json!([change(SUI, "2")])),
        ]));
        let activity = service(transport)
            .get_activity(&address(), &coin_types(&[SUI]))
            .await
            .unwrap();

        let digests: Vec<&str> = activity[SUI]
            .entries
            .iter()
            .map(|e| e.event.digest.as_str())
            .collect();
        assert_eq!(digests, vec!["aaa", "bbb"]);
    }

    #[tokio::test]
    async fn caps_each_group_at_the_window() {
        let transactions: Vec<Value> = (0..25)
            .map(|i| tx(&format!("digest-{i:02}"), i, json!([change(SUI, "1")])))
            .collect();
        let transport = MockTransport::new(json!(transactions));
        let activity = service(transport)
            .get_activity(&address(), &coin_types(&[SUI]))
            .await
            .unwrap();

        let entries = &activity[SUI].entries;
        assert_eq!(entries.len(), ACTIVITY_WINDOW);
        // The window keeps the most recent timestamps (24 down to 15).
        assert_eq!(entries[0].event.timestamp_ms, Some(24));
        assert_eq!(entries[ACTIVITY_WINDOW - 1].event.timestamp_ms, Some(15));
    }

    #[tokio::test]
    async fn ignores_changes_owned_by_other_addresses() {
        let transport = MockTransport::new(json!([
            tx(
                "digest-1",
                1_000,
                json!([
                    change(SUI, "5"),
                    {
                        "owner": {"AddressOwner": "0xother"},
                        "coinType": SUI,
                        "amount": "-5",
                    },
                ]),
            ),
        ]));
        let activity = service(transport)
            .get_activity(&address(), &coin_types(&[SUI]))
            .await
            .unwrap();

        assert_eq!(activity[SUI].entries.len(), 1);
        assert_eq!(activity[SUI].entries[0].event.delta, 5);
    }

    #[tokio::test]
    async fn ignores_coin_types_outside_the_query_set() {
        let transport = MockTransport::new(json!([
            tx("digest-1", 1_000, json!([change(SUI, "5"), change(USDC, "9")])),
        ]));
        let activity = service(transport)
            .get_activity(&address(), &coin_types(&[SUI]))
            .await
            .unwrap();

        assert_eq!(activity.len(), 1);
        assert_eq!(activity[SUI].entries.len(), 1);
    }

    #[tokio::test]
    async fn coin_without_history_gets_empty_group() {
        let transport = MockTransport::new(json!([
            tx("digest-1", 1_000, json!([change(SUI, "5")])),
        ]));
        let activity = service(transport)
            .get_activity(&address(), &coin_types(&[SUI, USDC]))
            .await
            .unwrap();

        assert!(activity[USDC].entries.is_empty());
        assert_eq!(activity[USDC].coin_type, USDC);
    }

    #[tokio::test]
    async fn one_transaction_yields_one_event_per_coin() {
        let transport = MockTransport::new(json!([
            tx("shared-digest", 1_000, json!([change(SUI, "-3"), change(USDC, "3")])),
        ]));
        let activity = service(transport)
            .get_activity(&address(), &coin_types(&[SUI, USDC]))
            .await
            .unwrap();

        assert_eq!(activity[SUI].entries[0].event.digest, "shared-digest");
        assert_eq!(activity[USDC].entries[0].event.digest, "shared-digest");
        assert_eq!(activity[SUI].entries[0].event.delta, -3);
        assert_eq!(activity[USDC].entries[0].event.delta, 3);
    }

    #[tokio::test]
    async fn display_delta_is_signed() {
        let transport = MockTransport::new(json!([
            tx("digest-1", 1_000, json!([change(SUI, "-42")])),
        ]));
        let activity = service(transport)
            .get_activity(&address(), &coin_types(&[SUI]))
            .await
            .unwrap();

        assert_eq!(activity[SUI].entries[0].display_delta, "-42");
    }

    #[tokio::test]
    async fn transactions_without_balance_changes_are_dropped() {
        let transport = MockTransport::new(json!([
            {"digest": "digest-1", "timestampMs": "1000"},
            tx("digest-2", 2_000, json!([change(SUI, "1")])),
        ]));
        let activity = service(transport)
            .get_activity(&address(), &coin_types(&[SUI]))
            .await
            .unwrap();

        assert_eq!(activity[SUI].entries.len(), 1);
    }

    #[tokio::test]
    async fn whole_query_failure_propagates() {
        let transport = MockTransport::failing("node unreachable");
        let result = service(transport)
            .get_activity(&address(), &coin_types(&[SUI]))
            .await;

        assert!(matches!(result, Err(ActivityFetchError::Rpc(_))));
    }
}
