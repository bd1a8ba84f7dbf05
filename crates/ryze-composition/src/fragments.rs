//! Markup fragments inserted by the patch rules
//!
//! Each fragment is a single line of JSX using the shared component shim
//! (`Navbar`, `Button`, `Card`, `Sidebar`, `Chart`, `window.Lucide`).

/// Opening tag of the basic page wrapper
pub const WRAPPER_OPEN: &str = r#"<div className="min-h-screen bg-gray-50 dark:bg-black">"#;

/// Opening tag of the full-site wrapper
pub const ENTERPRISE_WRAPPER_OPEN: &str = r#"<div className="min-h-screen bg-gray-50 dark:bg-black font-sans text-gray-900 dark:text-gray-100">"#;

/// Hero headline, also the hero's presence marker for the features rule
pub const HERO_HEADLINE: &str = "Build Faster with AI";

/// Gradient hero with two call-to-action buttons
pub const HERO: &str = r#"<div className="py-20 text-center bg-gradient-to-b from-blue-50 to-white dark:from-gray-900 dark:to-black"><h1 className="text-5xl font-bold mb-6 bg-clip-text text-transparent bg-gradient-to-r from-blue-600 to-purple-600">Build Faster with AI</h1><p className="text-xl text-gray-600 dark:text-gray-300 mb-8 max-w-2xl mx-auto">The most advanced platform for deploying web applications instantly.</p><div className="flex justify-center gap-4"><Button className="rounded-full px-8 py-6 text-lg">Get Started</Button><Button className="rounded-full px-8 py-6 text-lg bg-white text-gray-900 border hover:bg-gray-50">Learn More</Button></div></div>"#;

/// Three-column "Why Choose Us" card grid
pub const FEATURES: &str = r#"<div className="py-16 px-6"><h2 className="text-3xl font-bold text-center mb-12">Why Choose Us</h2><div className="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-6xl mx-auto"><Card className="p-8 hover:shadow-lg transition-all"><window.Lucide.Zap className="w-10 h-10 text-yellow-500 mb-4" /><h3 className="text-xl font-bold mb-2">Lightning Fast</h3><p className="text-gray-500">Deploy in seconds, not minutes.</p></Card><Card className="p-8 hover:shadow-lg transition-all"><window.Lucide.Shield className="w-10 h-10 text-green-500 mb-4" /><h3 className="text-xl font-bold mb-2">Secure by Default</h3><p className="text-gray-500">Enterprise-grade security built-in.</p></Card><Card className="p-8 hover:shadow-lg transition-all"><window.Lucide.Globe className="w-10 h-10 text-blue-500 mb-4" /><h3 className="text-xl font-bold mb-2">Global Scale</h3><p className="text-gray-500">Run your app on the edge.</p></Card></div></div>"#;

/// Copyright footer with three links
pub const FOOTER: &str = r##"<footer className="py-8 text-center text-gray-500 border-t dark:border-gray-800 mt-12"><p>&copy; 2024 Ryze AI. All rights reserved.</p><div className="flex justify-center gap-4 mt-4 text-sm"><a href="#">Privacy</a><a href="#">Terms</a><a href="#">Twitter</a></div></footer>"##;

/// Two-card testimonial grid
pub const TESTIMONIALS: &str = r#"<div className="py-20 bg-gray-50 dark:bg-gray-900/50"><h2 className="text-3xl font-bold text-center mb-12">Trusted by Developers</h2><div className="grid grid-cols-1 md:grid-cols-2 gap-8 max-w-4xl mx-auto px-6"><Card className="p-6"><p className="italic text-gray-600 mb-4">"Ryze AI changed how we ship software. Absolutely incredible."</p><div className="flex items-center gap-3"><div className="w-10 h-10 rounded-full bg-blue-100 flex items-center justify-center font-bold text-blue-600">JD</div><div><div className="font-bold">John Doe</div><div className="text-sm text-gray-500">CTO, TechCorp</div></div></div></Card><Card className="p-6"><p className="italic text-gray-600 mb-4">"The best AI coding assistant I have ever used. Highly recommended."</p><div className="flex items-center gap-3"><div className="w-10 h-10 rounded-full bg-purple-100 flex items-center justify-center font-bold text-purple-600">AS</div><div><div className="font-bold">Alice Smith</div><div className="text-sm text-gray-500">Lead Dev, StartupInc</div></div></div></Card></div></div>"#;

/// Full-site navbar
pub const ENTERPRISE_NAVBAR: &str = r##"<Navbar brand="Ryze Enterprise" links={[{label:"Platform", href:"#"}, {label:"Solutions", href:"#"}, {label:"Pricing", href:"#"}]} user={{name:"Admin", avatar:"https://github.com/shadcn.png"}} className="sticky top-0 z-50" />"##;

/// Full-site hero; ends with the features anchor `</button></div>`
pub const ENTERPRISE_HERO: &str = r#"<div className="py-24 text-center"><h1 className="text-6xl font-extrabold mb-6 tracking-tight">Ship Your Idea <span className="text-blue-600">Today</span></h1><p className="text-2xl text-gray-500 mb-10 max-w-3xl mx-auto">Ryze AI generates production-ready full-stack applications in seconds.</p><button className="px-8 py-4 bg-black dark:bg-white text-white dark:text-black rounded-full text-lg font-bold hover:opacity-80 transition-opacity">Start Building Free</button></div>"#;

/// Full-site three-pillar feature row
pub const ENTERPRISE_FEATURES: &str = r#"<div className="py-20 bg-white dark:bg-gray-900"><div className="max-w-6xl mx-auto px-6 grid grid-cols-1 md:grid-cols-3 gap-12 text-center"><div><div className="w-16 h-16 bg-blue-100 rounded-2xl flex items-center justify-center mx-auto mb-6"><window.Lucide.Cpu className="w-8 h-8 text-blue-600" /></div><h3 className="text-xl font-bold mb-2">AI Powered</h3><p className="text-gray-500">Built on next-gen LLMs.</p></div><div><div className="w-16 h-16 bg-purple-100 rounded-2xl flex items-center justify-center mx-auto mb-6"><window.Lucide.Zap className="w-8 h-8 text-purple-600" /></div><h3 className="text-xl font-bold mb-2">Instant Deploy</h3><p className="text-gray-500">From prompt to production.</p></div><div><div className="w-16 h-16 bg-green-100 rounded-2xl flex items-center justify-center mx-auto mb-6"><window.Lucide.Layers className="w-8 h-8 text-green-600" /></div><h3 className="text-xl font-bold mb-2">Full Stack</h3><p className="text-gray-500">React, Node, Python included.</p></div></div></div>"#;

/// Full-site footer
pub const ENTERPRISE_FOOTER: &str = r#"<footer className="py-12 border-t dark:border-gray-800 text-center text-gray-500"><p>&copy; 2026 Ryze AI Inc.</p></footer>"#;

/// Sidebar with three navigation items
pub const SIDEBAR: &str = r#"<Sidebar items={[{label:"Dashboard", icon:"LayoutDashboard"}, {label:"Settings", icon:"Settings"}, {label:"Pro", icon:"Zap"}]} activeItem="Dashboard" className="h-screen hidden md:block" />"#;

/// Standard navbar for `brand`
pub fn navbar(brand: &str) -> String {
    format!(
        r##"<Navbar brand="{brand}" links={{[{{label:"Home", href:"#"}}, {{label:"Features", href:"#"}}, {{label:"Pricing", href:"#"}}]}} user={{{{name:"User", avatar:"https://github.com/shadcn.png"}}}} className="mb-8" />"##
    )
}

/// Bar and line charts in `color`
pub fn charts(color: &str) -> String {
    format!(
        r#"<div className="grid grid-cols-1 md:grid-cols-2 gap-4 my-8"><Chart type="bar" color="{color}" /><Chart type="line" color="{color}" /></div>"#
    )
}
