use crate::net::{NetError, NetResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Protocol {
    Tcp = 0,
    Udp = 1,
    Sctp = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Port {
    number: u16,
    protocol: Protocol,
}

impl Port {
    pub fn new(number: u32, protocol: Protocol) -> NetResult<Self> {
        match u16::try_from(number) {
            Ok(number) if number != 0 => Ok(Self { number, protocol }),
            _ => Err(NetError::PortOutOfRange { provided: number }),
        }
    }

    pub fn tcp(number: u32) -> NetResult<Self> {
        Self::new(number, Protocol::Tcp)
    }

    pub fn number(&self) -> u16 {
        self.number
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}
