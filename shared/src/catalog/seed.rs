//! Seed catalog
//!
//! Loaded once per process. Every consumer gets its own copy, so runtime
//! mutations never leak back into the seed.

use crate::models::{Category, Price, Product};

struct SeedProduct {
    id: u64,
    title: &'static str,
    description: &'static str,
    image: &'static str,
    price: u64,
    icon: &'static str,
    category: &'static str,
    featured: bool,
    in_stock: bool,
    tags: &'static [&'static str],
    features: &'static [&'static str],
    rating: f32,
    brand: Option<&'static str>,
}

impl SeedProduct {
    fn to_product(&self) -> Product {
        Product {
            id: self.id,
            title: self.title.to_string(),
            description: self.description.to_string(),
            image: self.image.to_string(),
            icon: self.icon.to_string(),
            price: Price::new(self.price),
            category: self.category.to_string(),
            featured: self.featured,
            in_stock: self.in_stock,
            tags: self.tags.iter().map(|s| s.to_string()).collect(),
            features: self.features.iter().map(|s| s.to_string()).collect(),
            rating: Some(self.rating),
            brand: self.brand.map(str::to_string),
        }
    }
}

const CATEGORIES: &[(&str, &str, &str, &str)] = &[
    (
        "infrastructure",
        "IT Infrastructure",
        "Enterprise-grade hardware for your organization",
        "Server",
    ),
    (
        "user-devices",
        "User Devices",
        "Laptops, smartphones and mobility devices",
        "Laptop",
    ),
    (
        "networking",
        "Networking",
        "Connectivity and network management solutions",
        "Network",
    ),
    (
        "security",
        "Security",
        "Protection against threats and vulnerabilities",
        "Shield",
    ),
    (
        "solutions",
        "Solutions",
        "Integrated solutions for specific requirements",
        "Database",
    ),
];

const PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        id: 1,
        title: "Enterprise Servers",
        description: "High-performance servers for business-critical applications.",
        image: "https://images.unsplash.com/photo-1591405351990-4726e331f141?q=80&w=2070&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
        price: 89_999,
        icon: "Server",
        category: "infrastructure",
        featured: true,
        in_stock: true,
        tags: &["server", "hardware", "enterprise"],
        features: &[
            "Dual Intel Xeon processors",
            "128GB ECC RAM",
            "Hot-swappable drive bays",
            "Redundant power supplies",
            "Remote management",
        ],
        rating: 4.8,
        brand: Some("Dell"),
    },
    SeedProduct {
        id: 2,
        title: "Network Switches",
        description: "Enterprise-grade switches for high-speed network connectivity.",
        image: "https://images.unsplash.com/photo-1647423619058-8b3aa04a4c97?q=80&w=3174&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
        price: 24_999,
        icon: "Router",
        category: "networking",
        featured: true,
        in_stock: true,
        tags: &["networking", "switch", "connectivity"],
        features: &[
            "48 Gigabit Ethernet ports",
            "4 SFP+ uplinks",
            "Layer 3 switching",
            "Advanced QoS",
            "VLAN support",
        ],
        rating: 4.5,
        brand: Some("Cisco"),
    },
    SeedProduct {
        id: 3,
        title: "Storage Arrays",
        description: "Scalable storage systems for growing data needs.",
        image: "https://images.unsplash.com/photo-1600267204026-d2162b128773?q=80&w=2070&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
        price: 39_999,
        icon: "HardDrive",
        category: "infrastructure",
        featured: false,
        in_stock: true,
        tags: &["storage", "data", "enterprise"],
        features: &[
            "20TB raw capacity",
            "RAID 0, 1, 5, 10 support",
            "Expandable design",
            "Hot-swap capability",
            "Data deduplication",
        ],
        rating: 4.3,
        brand: Some("HP"),
    },
    SeedProduct {
        id: 4,
        title: "Hardware Firewalls",
        description: "Hardware firewalls and security devices for robust protection.",
        image: "https://images.unsplash.com/photo-1563770557593-978789a237fd?q=80&w=2070&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
        price: 59_999,
        icon: "Shield",
        category: "security",
        featured: true,
        in_stock: true,
        tags: &["security", "firewall", "protection"],
        features: &[
            "Stateful packet inspection",
            "VPN support",
            "IDS/IPS capabilities",
            "Multiple WAN interfaces",
            "Content filtering",
        ],
        rating: 4.7,
        brand: Some("Cisco"),
    },
    SeedProduct {
        id: 5,
        title: "Server Processors",
        description: "High-performance CPUs designed for server applications.",
        image: "https://images.unsplash.com/photo-1591799264318-7e6ef8ddb7ea?q=80&w=2074&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
        price: 45_999,
        icon: "Cpu",
        category: "infrastructure",
        featured: false,
        in_stock: false,
        tags: &["processor", "server", "hardware"],
        features: &[
            "28 cores / 56 threads",
            "4.5GHz max turbo frequency",
            "38.5MB cache",
            "PCIe 4.0 support",
            "Advanced security features",
        ],
        rating: 4.1,
        brand: Some("Dell"),
    },
    SeedProduct {
        id: 6,
        title: "Business Laptops",
        description: "Reliable laptops designed for business use with extended warranty.",
        image: "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?q=80&w=2071&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
        price: 68_999,
        icon: "Laptop",
        category: "user-devices",
        featured: true,
        in_stock: true,
        tags: &["laptop", "business", "mobility"],
        features: &[
            "14\" 4K display",
            "Intel Core i7 processor",
            "32GB RAM",
            "1TB SSD",
            "Windows 11 Pro",
            "3-year warranty",
        ],
        rating: 4.6,
        brand: Some("Lenovo"),
    },
    SeedProduct {
        id: 7,
        title: "Enterprise Smartphones",
        description: "Secure smartphones with enterprise management features.",
        image: "https://images.unsplash.com/photo-1598327105666-5b89351aff97?q=80&w=2027&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
        price: 52_999,
        icon: "Smartphone",
        category: "user-devices",
        featured: false,
        in_stock: true,
        tags: &["mobile", "smartphone", "enterprise"],
        features: &[
            "6.7\" AMOLED display",
            "Advanced biometric security",
            "5G connectivity",
            "Enterprise-grade security",
            "MDM integration",
        ],
        rating: 4.2,
        brand: Some("Samsung"),
    },
    SeedProduct {
        id: 8,
        title: "Professional Monitors",
        description: "High-resolution monitors for professional work environments.",
        image: "https://images.unsplash.com/photo-1527443224154-c4a3942d3acf?q=80&w=2070&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
        price: 29_999,
        icon: "Monitor",
        category: "user-devices",
        featured: false,
        in_stock: true,
        tags: &["monitor", "display", "professional"],
        features: &[
            "32\" 4K UHD display",
            "HDR10 support",
            "99% Adobe RGB",
            "USB-C connectivity",
            "Height adjustable stand",
        ],
        rating: 4.4,
        brand: Some("Samsung"),
    },
    SeedProduct {
        id: 9,
        title: "Zero Trust Access Solution",
        description: "Comprehensive zero trust network access solution for secure remote access.",
        image: "https://images.unsplash.com/photo-1614064641938-3bbee52942c7?q=80&w=2070&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
        price: 79_999,
        icon: "Lock",
        category: "security",
        featured: true,
        in_stock: true,
        tags: &["zero-trust", "security", "access"],
        features: &[
            "Multi-factor authentication",
            "Least privilege access",
            "Real-time monitoring",
            "User behavior analytics",
            "Seamless VPN integration",
        ],
        rating: 4.9,
        brand: None,
    },
    SeedProduct {
        id: 10,
        title: "Data Loss Prevention",
        description: "Enterprise DLP solution to prevent data leakage and theft.",
        image: "https://images.unsplash.com/photo-1639322537228-f710d846310a?q=80&w=2232&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
        price: 69_999,
        icon: "Shield",
        category: "security",
        featured: false,
        in_stock: true,
        tags: &["DLP", "data-security", "protection"],
        features: &[
            "Content awareness",
            "Endpoint protection",
            "Email monitoring",
            "Cloud application security",
            "Regulatory compliance",
        ],
        rating: 4.0,
        brand: None,
    },
    SeedProduct {
        id: 11,
        title: "Web Application Firewall",
        description: "Advanced WAF for protecting web applications from attacks.",
        image: "https://images.unsplash.com/photo-1544197150-b99a580bb7a8?q=80&w=2070&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
        price: 54_999,
        icon: "Globe",
        category: "security",
        featured: false,
        in_stock: true,
        tags: &["WAF", "web-security", "firewall"],
        features: &[
            "OWASP top 10 protection",
            "Bot mitigation",
            "API security",
            "Custom rule creation",
            "Real-time threat intelligence",
        ],
        rating: 4.3,
        brand: None,
    },
    SeedProduct {
        id: 12,
        title: "Migration Solution",
        description: "End-to-end migration services for cloud or datacenter transitions.",
        image: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?q=80&w=2072&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
        price: 145_999,
        icon: "ArrowRightLeft",
        category: "solutions",
        featured: false,
        in_stock: true,
        tags: &["migration", "cloud", "datacenter"],
        features: &[
            "Assessment and planning",
            "Data migration",
            "Application modernization",
            "Minimal downtime",
            "Post-migration support",
        ],
        rating: 3.8,
        brand: None,
    },
    SeedProduct {
        id: 13,
        title: "vCISO Service",
        description: "Virtual Chief Information Security Officer services for organizations.",
        image: "https://images.unsplash.com/photo-1507679799987-c73779587ccf?q=80&w=2071&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
        price: 99_999,
        icon: "UserCheck",
        category: "solutions",
        featured: false,
        in_stock: true,
        tags: &["vCISO", "security", "advisory"],
        features: &[
            "Security strategy development",
            "Risk assessment",
            "Compliance management",
            "Security awareness training",
            "Incident response planning",
        ],
        rating: 4.5,
        brand: None,
    },
    SeedProduct {
        id: 14,
        title: "Security Audit Package",
        description: "Comprehensive security audit and compliance assessment.",
        image: "https://images.unsplash.com/photo-1450101499163-c8848c66ca85?q=80&w=2070&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
        price: 89_999,
        icon: "FileText",
        category: "solutions",
        featured: true,
        in_stock: true,
        tags: &["audit", "compliance", "security"],
        features: &[
            "Vulnerability assessment",
            "Penetration testing",
            "Compliance gap analysis",
            "Security control evaluation",
            "Remediation guidance",
        ],
        rating: 4.6,
        brand: None,
    },
    SeedProduct {
        id: 15,
        title: "Enterprise Routers",
        description: "High-performance routers for enterprise networks.",
        image: "https://images.unsplash.com/photo-1544197150-b99a580bb7a8?q=80&w=2070&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
        price: 35_999,
        icon: "Network",
        category: "networking",
        featured: false,
        in_stock: true,
        tags: &["router", "networking", "connectivity"],
        features: &[
            "10 Gbps throughput",
            "SD-WAN capabilities",
            "Advanced routing protocols",
            "Integrated security",
            "High availability",
        ],
        rating: 3.9,
        brand: Some("Cisco"),
    },
    SeedProduct {
        id: 16,
        title: "Wireless Access Points",
        description: "Enterprise-grade wireless access points for reliable connectivity.",
        image: "https://images.unsplash.com/photo-1605146768851-eda79da39897?q=80&w=2070&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
        price: 12_999,
        icon: "Router",
        category: "networking",
        featured: false,
        in_stock: true,
        tags: &["wireless", "wifi", "networking"],
        features: &[
            "Wi-Fi 6 support",
            "MIMO technology",
            "Mesh networking",
            "Enterprise-grade security",
            "Cloud management",
        ],
        rating: 4.2,
        brand: Some("HP"),
    },
];

/// The five storefront categories
pub fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|(id, name, description, icon)| Category::new(*id, *name, *description, *icon))
        .collect()
}

/// The sixteen seed products, in dataset order
pub fn products() -> Vec<Product> {
    PRODUCTS.iter().map(SeedProduct::to_product).collect()
}
