use crate::models::{Ecosystem, PackageEntry, PackageLinks, PackageStatus, Requirements};

pub static PACKAGE_CATALOG: &[PackageEntry] = &[
    PackageEntry {
        key: "electron",
        name: "@harnessgg/electron",
        binary: "harness-electron",
        route: "/electron",
        ecosystem: Ecosystem::Npm,
        registry_name: "@harnessgg/electron",
        install: "npm install -D @harnessgg/electron",
        status: PackageStatus::Published,
        description: "Interact with any Electron app via Chrome DevTools Protocol. Click, type, screenshot, assert. Structured JSON output.",
        purpose: "Interact with any Electron app via Chrome DevTools Protocol",
        requirements: Requirements {
            runtime: "Node.js >= 20",
            target_app: None,
        },
        links: PackageLinks {
            docs: "https://harness.gg/electron",
            github: "https://github.com/harnessgg/electron",
            registry: "https://www.npmjs.com/package/@harnessgg/electron",
        },
        commands: "connect, dom, type, click, wait, screenshot, assert, evaluate, disconnect, sessions, capabilities",
        fallback_version: Some("0.1.0"),
    },
    PackageEntry {
        key: "kdenlive",
        name: "harnessgg-kdenlive",
        binary: "harness-kdenlive",
        route: "/kdenlive",
        ecosystem: Ecosystem::Pypi,
        registry_name: "harnessgg-kdenlive",
        install: "pip install harnessgg-kdenlive",
        status: PackageStatus::Published,
        description: "Harness the Kdenlive video editor. Create projects, edit timelines, apply effects, and render. Structured JSON output.",
        purpose: "Automate Kdenlive video editing timelines, effects, and renders",
        requirements: Requirements {
            runtime: "Python >= 3.10",
            target_app: Some("Kdenlive with bridge running via harness-kdenlive bridge start"),
        },
        links: PackageLinks {
            docs: "https://harness.gg/kdenlive",
            github: "https://github.com/harnessgg/harness-kdenlive",
            registry: "https://pypi.org/project/harnessgg-kdenlive/",
        },
        commands: "bridge start|stop|status|verify, create-project, import-asset, timeline edits, effects, render-project, render-status",
        fallback_version: Some("0.4.0"),
    },
    PackageEntry {
        key: "blender",
        name: "harnessgg-blender",
        binary: "harness-blender",
        route: "/blender",
        ecosystem: Ecosystem::Pypi,
        registry_name: "harnessgg-blender",
        install: "pip install harnessgg-blender",
        status: PackageStatus::Published,
        description: "Harness the Blender 3D suite. Script scenes, objects, materials, and renders from the CLI with structured JSON output.",
        purpose: "Script Blender scenes, objects, materials, and renders from the CLI",
        requirements: Requirements {
            runtime: "Python >= 3.10",
            target_app: Some("Blender with bridge running via harness-blender bridge start"),
        },
        links: PackageLinks {
            docs: "https://harness.gg/blender",
            github: "https://github.com/harnessgg/harness-blender",
            registry: "https://pypi.org/project/harnessgg-blender/",
        },
        commands: "bridge start|stop|status|verify, file/object/camera/light/material/modifier commands, render still/animation/status",
        fallback_version: Some("0.2.0"),
    },
    PackageEntry {
        key: "gimp",
        name: "harnessgg-gimp",
        binary: "harness-gimp",
        route: "/gimp",
        ecosystem: Ecosystem::Pypi,
        registry_name: "harnessgg-gimp",
        install: "pip install harnessgg-gimp",
        status: PackageStatus::Published,
        description: "Harness GIMP for image editing. Apply filters, adjustments, and exports programmatically with structured JSON output.",
        purpose: "Automate GIMP image editing with filters, adjustments, layers, and export",
        requirements: Requirements {
            runtime: "Python >= 3.10",
            target_app: Some("GIMP with bridge running via harness-gimp bridge start"),
        },
        links: PackageLinks {
            docs: "https://harness.gg/gimp",
            github: "https://github.com/harnessgg/harness-gimp",
            registry: "https://pypi.org/project/harnessgg-gimp/",
        },
        commands: "bridge start|stop|status|verify, file/transform/color/filter/layer/selection/text commands",
        fallback_version: Some("0.2.1"),
    },
    PackageEntry {
        key: "browser",
        name: "@harnessgg/browser",
        binary: "harness-browser",
        route: "/browser",
        ecosystem: Ecosystem::Npm,
        registry_name: "@harnessgg/browser",
        install: "npm install -D @harnessgg/browser",
        status: PackageStatus::ComingSoon,
        description: "Harness web browsers for AI agents. Automate tabs, navigation, DOM interaction, and screenshots via a CLI with structured JSON output.",
        purpose: "Automate web browsers (Chromium, Firefox, WebKit) for AI agents",
        requirements: Requirements {
            runtime: "Node.js >= 20",
            target_app: None,
        },
        links: PackageLinks {
            docs: "https://harness.gg/browser",
            github: "https://github.com/harnessgg/harness-browser",
            registry: "https://www.npmjs.com/package/@harnessgg/browser",
        },
        commands: "connect, disconnect, navigate, tabs, dom, query, click, type, wait, screenshot, assert, evaluate",
        fallback_version: None,
    },
];
