// Monitoring model types

use serde::{Deserialize, Serialize};

use super::key::InstanceKey;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DiscoveryMetric {
    pub timestamp: String,
    pub instance_key: InstanceKey,
    pub duration_millis: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DiscoveryQueueMetric {
    pub timestamp: String,
    pub queue_name: String,
    pub queue_length: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BackendQueryMetric {
    pub timestamp: String,
    pub query: String,
    pub duration_millis: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WriteBufferMetric {
    pub timestamp: String,
    pub buffer_size: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metric_deserialization() {
        let metrics: Vec<DiscoveryMetric> = serde_json::from_value(json!([
            {"Timestamp": "2024-01-01T00:00:00Z", "InstanceKey": {"Hostname": "db1", "Port": 3306}, "DurationMillis": 12},
            {"Timestamp": "2024-01-01T00:00:01Z"}
        ]))
        .unwrap();
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].duration_millis, 12);
        assert!(metrics[1].instance_key.is_empty());

        let queue: DiscoveryQueueMetric =
            serde_json::from_value(json!({"QueueName": "DEFAULT", "QueueLength": 4})).unwrap();
        assert_eq!(queue.queue_length, 4);
    }
}
