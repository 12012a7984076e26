use super::{Health, Note};

#[derive(Debug, Clone, Copy)]
pub struct Component {
    pub name: &'static str,
    pub description: &'static str,
    pub status: Health,
    pub metric: &'static str,
}

pub const DATA_FLOW: [&str; 8] = [
    "Cliente",
    "Load Balancer",
    "API Gateway",
    "WebSocket Server",
    "Message Broker",
    "Database",
    "Cache",
    "CDN",
];

pub const COMPONENTS: [Component; 8] = [
    Component {
        name: "Load Balancer",
        description: "AWS ALB/NGINX - Distribuição de conexões",
        status: Health::Active,
        metric: "99.9% uptime",
    },
    Component {
        name: "API Gateway",
        description: "Roteamento e autenticação JWT",
        status: Health::Active,
        metric: "50ms latência média",
    },
    Component {
        name: "WebSocket Servers",
        description: "Node.js/Go - Conexões persistentes",
        status: Health::Active,
        metric: "10K conexões ativas",
    },
    Component {
        name: "Message Broker",
        description: "Apache Kafka - Filas de mensagens",
        status: Health::Active,
        metric: "1M msg/s processadas",
    },
    Component {
        name: "Cache Layer",
        description: "Redis - Mensagens não entregues",
        status: Health::Active,
        metric: "2ms latência",
    },
    Component {
        name: "Database",
        description: "Cassandra/DynamoDB - Armazenamento",
        status: Health::Active,
        metric: "500GB armazenados",
    },
    Component {
        name: "CDN & Storage",
        description: "AWS S3 + CloudFront - Mídia",
        status: Health::Active,
        metric: "10TB transferidos",
    },
    Component {
        name: "Security Layer",
        description: "Criptografia ponta-a-ponta",
        status: Health::Active,
        metric: "AES-256 + TLS 1.3",
    },
];

pub const CHALLENGES: [Note; 3] = [
    Note {
        title: "Desafio: Picos de Tráfego",
        body: "Auto-scaling baseado em CPU/conexões ativas com Kubernetes",
    },
    Note {
        title: "Desafio: Latência",
        body: "Edge computing com AWS Lambda@Edge e CDN global",
    },
    Note {
        title: "Desafio: Segurança",
        body: "Criptografia ponta-a-ponta com Signal Protocol",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_starts_at_client_and_ends_at_cdn() {
        assert_eq!(DATA_FLOW.first(), Some(&"Cliente"));
        assert_eq!(DATA_FLOW.last(), Some(&"CDN"));
    }

    #[test]
    fn all_components_are_active() {
        assert!(COMPONENTS.iter().all(|c| c.status == Health::Active));
    }
}
