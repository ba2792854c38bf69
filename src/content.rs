// Static showcase content. The radar and the panels render whatever these
// tables say; nothing here is validated at runtime.

use crate::radar::{Blip, Ring};

pub const QUADRANTS: [&str; 4] = [
    "Languages & Frameworks",
    "Infrastructure & Cloud",
    "AI / ML",
    "DevOps & Tooling",
];

pub static BLIPS: &[Blip] = &[
    // Q0: Languages & Frameworks
    Blip { label: "GoLang", ring: Ring::Adopt, quadrant: 0, description: "Primary language for platform tooling & Terraform providers" },
    Blip { label: "Python", ring: Ring::Adopt, quadrant: 0, description: "LLM orchestration, scripting, automation" },
    Blip { label: "Bash", ring: Ring::Adopt, quadrant: 0, description: "Shell scripting for CI/CD & infra automation" },
    Blip { label: "C#", ring: Ring::Trial, quadrant: 0, description: "Synthetic monitoring runners & .NET services" },
    Blip { label: "Ruby", ring: Ring::Assess, quadrant: 0, description: "Legacy Chef cookbook development" },
    Blip { label: "PHP", ring: Ring::Assess, quadrant: 0, description: "WordPress migration workloads" },
    // Q1: Infrastructure & Cloud
    Blip { label: "Kubernetes", ring: Ring::Adopt, quadrant: 1, description: "Core orchestration — 500+ clusters managed" },
    Blip { label: "Terraform", ring: Ring::Adopt, quadrant: 1, description: "IaC for all Azure resource provisioning" },
    Blip { label: "Azure", ring: Ring::Adopt, quadrant: 1, description: "Primary cloud — 60+ regions" },
    Blip { label: "Docker", ring: Ring::Adopt, quadrant: 1, description: "Container runtime for all workloads" },
    Blip { label: "Airship", ring: Ring::Trial, quadrant: 1, description: "Bare-metal K8s lifecycle — 250+ sites" },
    Blip { label: "OpenStack", ring: Ring::Trial, quadrant: 1, description: "Private cloud orchestration via Airship" },
    Blip { label: "Ceph", ring: Ring::Trial, quadrant: 1, description: "Distributed storage for bare-metal clusters" },
    Blip { label: "AWS", ring: Ring::Assess, quadrant: 1, description: "Secondary cloud for select workloads" },
    // Q2: AI / ML
    Blip { label: "GPT-4", ring: Ring::Adopt, quadrant: 2, description: "Core LLM for chatbot & self-healing infra" },
    Blip { label: "RAG", ring: Ring::Adopt, quadrant: 2, description: "Retrieval-augmented generation for wiki search" },
    Blip { label: "LangChain", ring: Ring::Adopt, quadrant: 2, description: "LLM orchestration framework" },
    Blip { label: "AutoGen", ring: Ring::Trial, quadrant: 2, description: "Multi-agent orchestration for infra tasks" },
    Blip { label: "Llama 3.X", ring: Ring::Trial, quadrant: 2, description: "Open-source LLM evaluation" },
    Blip { label: "Phi 3.5", ring: Ring::Assess, quadrant: 2, description: "Small language model experimentation" },
    // Q3: DevOps & Tooling
    Blip { label: "Azure DevOps", ring: Ring::Adopt, quadrant: 3, description: "Primary CI/CD — pipelines, repos, artifacts" },
    Blip { label: "Jenkins", ring: Ring::Adopt, quadrant: 3, description: "Legacy CI for Airship deployments" },
    Blip { label: "Helm", ring: Ring::Adopt, quadrant: 3, description: "Kubernetes package manager" },
    Blip { label: "DataDog", ring: Ring::Adopt, quadrant: 3, description: "Observability & monitoring" },
    Blip { label: "ArgoCD", ring: Ring::Trial, quadrant: 3, description: "GitOps continuous delivery" },
    Blip { label: "GitHub Actions", ring: Ring::Trial, quadrant: 3, description: "CI/CD for open-source projects" },
    Blip { label: "Chef", ring: Ring::Trial, quadrant: 3, description: "Configuration management for MFA SRE" },
    Blip { label: "Ansible", ring: Ring::Trial, quadrant: 3, description: "Playbook-based automation" },
];

/// One era of the career timeline, newest first.
pub struct CareerPhase {
    pub label: &'static str,
    pub years: &'static str,
    pub title: &'static str,
    pub project: &'static str,
    pub impact: &'static str,
    pub tech: &'static [&'static str],
    pub color_rgb: (u8, u8, u8),
}

pub static CAREER_PHASES: &[CareerPhase] = &[
    CareerPhase {
        label: "The Intelligence Era",
        years: "2024 – 2026",
        title: "Principal Platform Engineer & DevOps",
        project: "M365 Service Engineering & AI Transformation",
        impact: "Architecting the \"Self-Healing Cloud\" using LLMs and Agentic Infrastructure.",
        tech: &[
            "LLMOps",
            "Azure AI Foundry",
            "GPT-4",
            "RAG Architecture",
            "LangChain",
            "AutoGen 2.0",
            "GoLang",
            "Python",
        ],
        color_rgb: (189, 0, 255),
    },
    CareerPhase {
        label: "The Fleet Commander",
        years: "2021 – 2023",
        title: "Senior SRE & Bare-Metal Orchestration Lead",
        project: "Operators Nexus & Deep SRE",
        impact: "Deployed 250+ sites (50 Greenfield, 200+ Brownfield) on Bare-Metal at global scale.",
        tech: &[
            "Airship",
            "OpenStack-Helm",
            "Kubernetes Internals",
            "ClusterAPI",
            "Azure Arc",
            "Ceph",
            "Calico",
        ],
        color_rgb: (142, 68, 173),
    },
    CareerPhase {
        label: "The Cloud Builder",
        years: "2014 – 2020",
        title: "Platform Engineer with DevOps & Undercloud",
        project: "Azure Undercloud & Global Expansion",
        impact: "Automated provisioning across 60+ Azure regions with infrastructure as code.",
        tech: &[
            "Terraform",
            "Chef",
            "Jenkins",
            "Azure",
            "PowerShell",
            "Ruby",
        ],
        color_rgb: (41, 128, 185),
    },
    CareerPhase {
        label: "The Foundation",
        years: "2008 – 2014",
        title: "Systems Engineer & Startup Developer",
        project: "Datacenter Operations & Web Platforms",
        impact: "From racking servers to shipping LAMP-stack products end to end.",
        tech: &["Linux", "PHP", "MySQL", "Apache", "Nagios"],
        color_rgb: (39, 174, 96),
    },
];

/// One headline metric for the animated stats panel.
pub struct StatSpec {
    pub label: &'static str,
    pub value: u32,
    pub suffix: &'static str,
    pub description: &'static str,
}

pub static STATS: &[StatSpec] = &[
    StatSpec { label: "Years of Experience", value: 16, suffix: "+", description: "Infrastructure, DevOps & AI" },
    StatSpec { label: "Cloud Regions", value: 60, suffix: "+", description: "Azure & AWS globally" },
    StatSpec { label: "Bare-Metal Sites", value: 250, suffix: "+", description: "Deployed via Airship" },
    StatSpec { label: "K8s Clusters", value: 500, suffix: "+", description: "Managed & orchestrated" },
    StatSpec { label: "CI/CD Pipelines", value: 200, suffix: "+", description: "Automated deployments" },
    StatSpec { label: "Cloud Services", value: 30, suffix: "+", description: "Azure PaaS & IaaS" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn every_blip_references_a_real_quadrant() {
        for blip in BLIPS {
            assert!(blip.quadrant < QUADRANTS.len(), "{}", blip.label);
        }
    }

    #[test]
    fn blip_labels_are_unique() {
        let labels: BTreeSet<&str> = BLIPS.iter().map(|b| b.label).collect();
        assert_eq!(labels.len(), BLIPS.len());
    }

    #[test]
    fn every_quadrant_has_blips() {
        for q in 0..QUADRANTS.len() {
            assert!(BLIPS.iter().any(|b| b.quadrant == q), "quadrant {q} empty");
        }
    }
}
