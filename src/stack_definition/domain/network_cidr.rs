use crate::shared::error::SynthError;
use crate::shared::Result;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Address space CDK-style VPCs default to
pub const DEFAULT_VPC_CIDR: &str = "10.0.0.0/16";

/// Prefix length of the single public subnet
pub const DEFAULT_SUBNET_MASK: u8 = 24;

/// IPv4 CIDR block, normalized to its network address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Cidr {
    network: Ipv4Addr,
    prefix: u8,
}

impl Ipv4Cidr {
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// The first block of length `mask` inside this one
    pub fn first_subnet(&self, mask: u8) -> Result<Ipv4Cidr> {
        if mask < self.prefix || mask > 32 {
            return Err(SynthError::InvalidCidr {
                cidr: format!("{}/{}", self.network, mask),
                reason: format!(
                    "Subnet mask /{} does not fit inside {} (expected /{} to /32)",
                    mask, self, self.prefix
                ),
            }
            .into());
        }
        Ok(Ipv4Cidr {
            network: self.network,
            prefix: mask,
        })
    }
}

impl FromStr for Ipv4Cidr {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| -> anyhow::Error {
            SynthError::InvalidCidr {
                cidr: s.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        let (address, prefix) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| invalid("Expected <address>/<prefix>"))?;
        let address: Ipv4Addr = address
            .parse()
            .map_err(|_| invalid("Address is not a valid IPv4 address"))?;
        let prefix: u8 = prefix
            .parse()
            .map_err(|_| invalid("Prefix length is not a number"))?;
        if prefix > 32 {
            return Err(invalid("Prefix length must be between 0 and 32"));
        }

        let mask = if prefix == 0 {
            0
        } else {
            u32::MAX << (32 - u32::from(prefix))
        };
        Ok(Ipv4Cidr {
            network: Ipv4Addr::from(u32::from(address) & mask),
            prefix,
        })
    }
}

impl std::fmt::Display for Ipv4Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix)
    }
}

/// VPC address space and the mask of its one public subnet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkLayout {
    pub vpc_cidr: Ipv4Cidr,
    pub subnet_mask: u8,
}

impl NetworkLayout {
    pub fn new(vpc_cidr: Ipv4Cidr, subnet_mask: u8) -> Result<Self> {
        vpc_cidr.first_subnet(subnet_mask)?;
        Ok(Self {
            vpc_cidr,
            subnet_mask,
        })
    }

    pub fn public_subnet(&self) -> Result<Ipv4Cidr> {
        self.vpc_cidr.first_subnet(self.subnet_mask)
    }
}

impl Default for NetworkLayout {
    fn default() -> Self {
        Self {
            vpc_cidr: Ipv4Cidr {
                network: Ipv4Addr::new(10, 0, 0, 0),
                prefix: 16,
            },
            subnet_mask: DEFAULT_SUBNET_MASK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let cidr: Ipv4Cidr = DEFAULT_VPC_CIDR.parse().unwrap();
        assert_eq!(cidr.to_string(), "10.0.0.0/16");
        assert_eq!(cidr.prefix(), 16);
    }

    #[test]
    fn test_parse_normalizes_host_bits() {
        let cidr: Ipv4Cidr = "172.16.5.9/16".parse().unwrap();
        assert_eq!(cidr.to_string(), "172.16.0.0/16");
    }

    #[test]
    fn test_parse_errors() {
        assert!("10.0.0.0".parse::<Ipv4Cidr>().is_err());
        assert!("10.0.0/16".parse::<Ipv4Cidr>().is_err());
        assert!("10.0.0.0/33".parse::<Ipv4Cidr>().is_err());
        assert!("10.0.0.0/x".parse::<Ipv4Cidr>().is_err());
    }

    #[test]
    fn test_first_subnet() {
        let cidr: Ipv4Cidr = "10.0.0.0/16".parse().unwrap();
        assert_eq!(cidr.first_subnet(24).unwrap().to_string(), "10.0.0.0/24");
        assert_eq!(cidr.first_subnet(16).unwrap().to_string(), "10.0.0.0/16");
    }

    #[test]
    fn test_first_subnet_mask_out_of_range() {
        let cidr: Ipv4Cidr = "10.0.0.0/16".parse().unwrap();
        let err = cidr.first_subnet(8).unwrap_err();
        assert!(err.to_string().contains("does not fit"));
        assert!(cidr.first_subnet(33).is_err());
    }

    #[test]
    fn test_default_layout() {
        let layout = NetworkLayout::default();
        assert_eq!(layout.vpc_cidr.to_string(), DEFAULT_VPC_CIDR);
        assert_eq!(layout.public_subnet().unwrap().to_string(), "10.0.0.0/24");
    }

    #[test]
    fn test_layout_rejects_wider_subnet() {
        let cidr: Ipv4Cidr = "10.0.0.0/20".parse().unwrap();
        assert!(NetworkLayout::new(cidr, 16).is_err());
        assert!(NetworkLayout::new(cidr, 28).is_ok());
    }
}
