use super::{Health, Note};

#[derive(Debug, Clone, Copy)]
pub struct Headline {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Resource {
    pub name: &'static str,
    pub usage: u8,
    pub max: u8,
    pub unit: &'static str,
}

impl Resource {
    /// Usage as a 0.0..=1.0 fraction, for progress bars.
    pub fn fraction(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        (f32::from(self.usage) / f32::from(self.max)).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub name: &'static str,
    pub status: Health,
    pub instances: u32,
    pub region: &'static str,
}

pub const HEADLINES: [Headline; 4] = [
    Headline {
        title: "Usuários Ativos",
        value: "2.5M",
        change: "+12%",
    },
    Headline {
        title: "Mensagens/Segundo",
        value: "45K",
        change: "+8%",
    },
    Headline {
        title: "Latência Média",
        value: "42ms",
        change: "-5ms",
    },
    Headline {
        title: "Uptime",
        value: "99.98%",
        change: "+0.02%",
    },
];

pub const RESOURCES: [Resource; 4] = [
    Resource { name: "CPU", usage: 65, max: 100, unit: "%" },
    Resource { name: "Memória", usage: 78, max: 100, unit: "%" },
    Resource { name: "Armazenamento", usage: 45, max: 100, unit: "%" },
    Resource { name: "Rede", usage: 32, max: 100, unit: "%" },
];

pub const SERVICES: [Service; 6] = [
    Service {
        name: "Load Balancer",
        status: Health::Healthy,
        instances: 3,
        region: "us-east-1",
    },
    Service {
        name: "API Gateway",
        status: Health::Healthy,
        instances: 5,
        region: "multi-region",
    },
    Service {
        name: "WebSocket Servers",
        status: Health::Healthy,
        instances: 12,
        region: "multi-region",
    },
    Service {
        name: "Kafka Cluster",
        status: Health::Healthy,
        instances: 6,
        region: "us-east-1",
    },
    Service {
        name: "Redis Cache",
        status: Health::Healthy,
        instances: 4,
        region: "multi-region",
    },
    Service {
        name: "Cassandra DB",
        status: Health::Healthy,
        instances: 9,
        region: "multi-region",
    },
];

pub const SECURITY_FEATURES: [&str; 6] = [
    "Criptografia TLS 1.3",
    "Signal Protocol E2E",
    "JWT Authentication",
    "Rate Limiting",
    "DDoS Protection",
    "WAF Enabled",
];

pub const SCALABILITY: [Note; 3] = [
    Note {
        title: "Escalabilidade Horizontal",
        body: "Auto-scaling baseado em métricas de CPU e conexões ativas",
    },
    Note {
        title: "Multi-Região",
        body: "Distribuição global com failover automático entre regiões",
    },
    Note {
        title: "Edge Computing",
        body: "Lambda@Edge para redução de latência e proximidade aos usuários",
    },
];

pub fn total_instances() -> u32 {
    SERVICES.iter().map(|service| service.instances).sum()
}
