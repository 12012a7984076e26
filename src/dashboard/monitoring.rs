use chrono::{DateTime, Duration, Utc};

use super::Note;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy)]
pub struct SystemMetric {
    pub name: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

/// One sample of a time series; `time` is the `HH:MM` axis label.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub time: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct ServiceErrors {
    pub service: &'static str,
    pub errors: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Medium,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: &'static str,
    /// How long before "now" the alert was raised.
    pub age_secs: i64,
    pub severity: Severity,
}

impl Alert {
    pub fn raised_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::seconds(self.age_secs)
    }
}

pub const SYSTEM_METRICS: [SystemMetric; 4] = [
    SystemMetric {
        name: "Conexões Ativas",
        value: "12.5K",
        change: "+5.2%",
        trend: Trend::Up,
    },
    SystemMetric {
        name: "Taxa de Erro",
        value: "0.02%",
        change: "-0.01%",
        trend: Trend::Down,
    },
    SystemMetric {
        name: "Throughput",
        value: "49K msg/s",
        change: "+12%",
        trend: Trend::Up,
    },
    SystemMetric {
        name: "Disponibilidade",
        value: "99.98%",
        change: "+0.01%",
        trend: Trend::Up,
    },
];

pub const LATENCY_MS: [Sample; 7] = [
    Sample { time: "00:00", value: 45.0 },
    Sample { time: "00:05", value: 42.0 },
    Sample { time: "00:10", value: 48.0 },
    Sample { time: "00:15", value: 41.0 },
    Sample { time: "00:20", value: 44.0 },
    Sample { time: "00:25", value: 39.0 },
    Sample { time: "00:30", value: 43.0 },
];

pub const THROUGHPUT: [Sample; 7] = [
    Sample { time: "00:00", value: 42_000.0 },
    Sample { time: "00:05", value: 45_000.0 },
    Sample { time: "00:10", value: 48_000.0 },
    Sample { time: "00:15", value: 44_000.0 },
    Sample { time: "00:20", value: 47_000.0 },
    Sample { time: "00:25", value: 50_000.0 },
    Sample { time: "00:30", value: 49_000.0 },
];

pub const ERRORS_BY_SERVICE: [ServiceErrors; 5] = [
    ServiceErrors { service: "API Gateway", errors: 2 },
    ServiceErrors { service: "WebSocket", errors: 1 },
    ServiceErrors { service: "Database", errors: 0 },
    ServiceErrors { service: "Cache", errors: 3 },
    ServiceErrors { service: "CDN", errors: 1 },
];

pub const ALERTS: [Alert; 3] = [
    Alert {
        kind: AlertKind::Warning,
        message: "Alto uso de CPU no servidor ws-03",
        age_secs: 300,
        severity: Severity::Medium,
    },
    Alert {
        kind: AlertKind::Info,
        message: "Auto-scaling ativado: +2 instâncias",
        age_secs: 600,
        severity: Severity::Low,
    },
    Alert {
        kind: AlertKind::Success,
        message: "Backup da base de dados concluído",
        age_secs: 900,
        severity: Severity::Low,
    },
];

pub const MONITORING_STACK: [Note; 3] = [
    Note {
        title: "Prometheus + Grafana",
        body: "Coleta de métricas e visualização em tempo real",
    },
    Note {
        title: "ELK Stack",
        body: "Elasticsearch, Logstash e Kibana para análise de logs",
    },
    Note {
        title: "AWS CloudWatch",
        body: "Monitoramento nativo da infraestrutura AWS",
    },
];
