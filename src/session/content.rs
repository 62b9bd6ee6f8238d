//! Canned text printed by the built-in commands.

pub(crate) const HELP: &str = "Available commands:

Navigation:
  ls          - List available pages
  cd <page>   - Navigate to page (home, apps, timeline, contact)
  pwd         - Show current location
  tree        - Show site structure

Information:
  whoami      - About Tony
  about       - Biography
  skills      - Technical skills
  experience  - Work experience
  education   - Education background
  projects    - GitHub projects
  contact     - Contact information

System:
  date        - Current date/time
  uptime      - Site uptime
  theme       - Toggle dark/light mode
  clear       - Clear terminal
  history     - Command history
  exit        - Close terminal

Fun:
  fortune     - Random quote
  joke        - Programming joke
  easter      - Easter eggs

Type any command to get started!";

pub(crate) const PAGES: &str = "Available pages:
  home        - Main page
  apps        - Projects and applications
  timeline    - Professional timeline
  contact     - Get in touch
  terminal    - Full terminal interface

Use 'cd <page>' to navigate.";

pub(crate) const SITE_TREE: &str = "tonybenoy.com/
├── home/           # Main landing page
├── apps/           # Projects and GitHub repos
├── timeline/       # Professional journey
└── contact/        # Get in touch";

pub(crate) const WHOAMI: &str = "Tony Benoy - Software Engineer & Technology Leader";

pub(crate) const ABOUT: &str = "Tony Benoy
Engineering leader and Software Engineer with expertise in Python, blockchain, and full-stack development.
Passionate about building scalable solutions and exploring emerging technologies.

Current focus: Web development, DevOps, and system architecture.";

pub(crate) const SKILLS: &str = "Technical Skills:
• Languages: Python, JavaScript, Go, Rust
• Frameworks: FastAPI, React, Django
• Databases: PostgreSQL, MongoDB, Redis
• DevOps: Docker, Kubernetes, CI/CD
• Cloud: AWS, GCP, Azure
• Blockchain: Ethereum, Solidity, Web3";

pub(crate) const EXPERIENCE: &str = "Professional Experience:
Check out the /timeline page for detailed work history and achievements.
Use 'cd timeline' to navigate there.";

pub(crate) const EDUCATION: &str = "Education:
Visit the /timeline page for educational background and certifications.
Use 'cd timeline' to see more details.";

pub(crate) const PROJECTS: &str = "GitHub Projects:
Visit the /apps page to see featured projects and GitHub repositories.
Use 'cd apps' to explore my work.";

pub(crate) const CONTACT: &str = "Contact Information:
Visit the /contact page for ways to get in touch.
Use 'cd contact' to see contact form and details.";

pub(crate) const UPTIME: &str = "Site has been running smoothly! 🚀";

/// Quotes printed by `fortune`.
pub const FORTUNES: &[&str] = &[
    "💭 Code is like humor. When you have to explain it, it's bad.",
    "💭 The best error message is the one that never shows up.",
    "💭 Programming is 10% science, 20% ingenuity, and 70% getting the ingenuity to work with the science.",
    "💭 Any fool can write code that a computer can understand. Good programmers write code that humans can understand.",
    "💭 First, solve the problem. Then, write the code.",
];

/// Jokes printed by `joke`.
pub const JOKES: &[&str] = &[
    "😄 Why do programmers prefer dark mode? Because light attracts bugs!",
    "😄 How many programmers does it take to change a light bulb? None, that's a hardware problem.",
    "😄 Why do Java developers wear glasses? Because they can't C#!",
    "😄 A SQL query goes into a bar, walks up to two tables and asks: 'Can I join you?'",
    "😄 99 little bugs in the code, 99 little bugs. Take one down, patch it around, 117 little bugs in the code.",
];

/// Easter eggs printed by `easter`.
pub const EASTER_EGGS: &[&str] = &[
    "🥚 You found an easter egg! There might be more hidden around...",
    "🎮 Konami Code activated! ↑↑↓↓←→←→BA",
    "🐧 sudo make me a sandwich",
    "☕ Coffee.exe not found. Developer.exe has stopped working.",
    "🎵 Never gonna give you up, never gonna let you down... 🎵",
];
