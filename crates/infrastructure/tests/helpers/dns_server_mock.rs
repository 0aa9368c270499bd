#![allow(dead_code)]
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

pub const TYPE_A: u16 = 1;
pub const TYPE_CNAME: u16 = 5;
pub const TYPE_AAAA: u16 = 28;

#[derive(Debug, Clone)]
pub enum MockAnswer {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Cname(String),
    /// A record of the given type with zero-length RDATA.
    Empty(u16),
}

/// What the mock server answers and how it misbehaves.
#[derive(Debug, Clone, Default)]
pub struct MockBehavior {
    pub answers: HashMap<(String, u16), Vec<MockAnswer>>,
    /// UDP replies carry TC and no answers; the full answer is served on TCP.
    pub truncate_udp: bool,
    /// Flip the reply ID so it no longer matches the query.
    pub wrong_id: bool,
    /// Never reply over UDP.
    pub silent: bool,
    /// Echo this name in the question section instead of the queried one.
    pub question_name: Option<String>,
    /// Echo this type in the question section instead of the queried one.
    pub question_type: Option<u16>,
}

impl MockBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, fqdn: &str, qtype: u16, answers: Vec<MockAnswer>) -> Self {
        self.answers
            .insert((fqdn.to_ascii_lowercase(), qtype), answers);
        self
    }

    pub fn ipv4(self, fqdn: &str, addresses: &[&str]) -> Self {
        let answers = addresses
            .iter()
            .map(|ip| MockAnswer::A(ip.parse().unwrap()))
            .collect();
        self.answer(fqdn, TYPE_A, answers)
    }

    pub fn ipv6(self, fqdn: &str, addresses: &[&str]) -> Self {
        let answers = addresses
            .iter()
            .map(|ip| MockAnswer::Aaaa(ip.parse().unwrap()))
            .collect();
        self.answer(fqdn, TYPE_AAAA, answers)
    }

    pub fn cname(self, fqdn: &str, target: &str) -> Self {
        self.answer(fqdn, TYPE_CNAME, vec![MockAnswer::Cname(target.to_string())])
    }
}

/// Loopback DNS server answering UDP and TCP on the same port.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        Self::start_on(IpAddr::V4(Ipv4Addr::LOCALHOST), behavior).await
    }

    pub async fn start_on(ip: IpAddr, behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::new(ip, 0)).await?;
        let local_addr = socket.local_addr()?;
        let listener = TcpListener::bind(local_addr).await?;
        let behavior = Arc::new(behavior);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_behavior = Arc::clone(&behavior);
        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if udp_behavior.silent {
                                continue;
                            }
                            let truncate = udp_behavior.truncate_udp;
                            if let Some(response) = build_response(&buf[..len], &udp_behavior, truncate) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        let tcp_behavior = Arc::clone(&behavior);
        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let behavior = Arc::clone(&tcp_behavior);
                tokio::spawn(async move {
                    let mut len_buf = [0u8; 2];
                    if stream.read_exact(&mut len_buf).await.is_err() {
                        return;
                    }
                    let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                    if stream.read_exact(&mut query).await.is_err() {
                        return;
                    }
                    if let Some(response) = build_response(&query, &behavior, false) {
                        let mut framed = (response.len() as u16).to_be_bytes().to_vec();
                        framed.extend_from_slice(&response);
                        let _ = stream.write_all(&framed).await;
                    }
                });
            }
        });

        Ok(Self {
            addr: local_addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Returns (qname with trailing dot, qtype, end offset of the question).
fn parse_question(query: &[u8]) -> Option<(String, u16, usize)> {
    let mut pos = 12;
    let mut labels = Vec::new();

    loop {
        let len = *query.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        let label = query.get(pos..pos + len)?;
        labels.push(String::from_utf8_lossy(label).to_ascii_lowercase());
        pos += len;
    }

    let qtype = u16::from_be_bytes([*query.get(pos)?, *query.get(pos + 1)?]);
    let name = if labels.is_empty() {
        ".".to_string()
    } else {
        format!("{}.", labels.join("."))
    };

    Some((name, qtype, pos + 4))
}

fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

fn build_response(query: &[u8], behavior: &MockBehavior, truncate: bool) -> Option<Vec<u8>> {
    if query.len() < 12 {
        return None;
    }

    let (name, qtype, question_end) = parse_question(query)?;
    let answers = if truncate {
        Vec::new()
    } else {
        behavior
            .answers
            .get(&(name.clone(), qtype))
            .cloned()
            .unwrap_or_default()
    };

    let mut response = Vec::with_capacity(512);

    let mut id = [query[0], query[1]];
    if behavior.wrong_id {
        id[0] ^= 0xff;
    }
    response.extend_from_slice(&id);

    // QR | RD (+TC), then RA
    response.push(if truncate { 0x83 } else { 0x81 });
    response.push(0x80);

    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&(answers.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&[0x00, 0x00]);

    if behavior.question_name.is_none() && behavior.question_type.is_none() {
        response.extend_from_slice(&query[12..question_end]);
    } else {
        let echoed_name = behavior.question_name.as_deref().unwrap_or(&name);
        response.extend_from_slice(&encode_name(echoed_name));
        response.extend_from_slice(&behavior.question_type.unwrap_or(qtype).to_be_bytes());
        response.extend_from_slice(&[0x00, 0x01]);
    }

    for answer in &answers {
        let (rtype, rdata) = match answer {
            MockAnswer::A(ip) => (TYPE_A, ip.octets().to_vec()),
            MockAnswer::Aaaa(ip) => (TYPE_AAAA, ip.octets().to_vec()),
            MockAnswer::Cname(target) => (TYPE_CNAME, encode_name(target)),
            MockAnswer::Empty(rtype) => (*rtype, Vec::new()),
        };

        response.extend_from_slice(&[0xc0, 0x0c]);
        response.extend_from_slice(&rtype.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]);
        response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        response.extend_from_slice(&rdata);
    }

    Some(response)
}
