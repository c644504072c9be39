//! Global CSS styles for the portfolio site.
//!
//! Dark gallery aesthetic: near-black surfaces, one warm accent, large type.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --bg: #0b0b0d;
  --bg-raised: #141418;
  --border: #24242a;

  /* Accent */
  --accent: #e8b04b;
  --accent-glow: rgba(232, 176, 75, 0.3);

  /* Text */
  --text-primary: #f4f4f5;
  --text-secondary: rgba(244, 244, 245, 0.72);
  --text-muted: rgba(244, 244, 245, 0.5);

  /* Typography */
  --font-display: 'Space Grotesk', 'Helvetica Neue', Arial, sans-serif;
  --font-body: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 1.75rem;
  --text-2xl: 2.5rem;
  --text-3xl: 4rem;

  --nav-height: 80px;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slide: 450ms cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-body);
  font-size: var(--text-base);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

/* === Navigation === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--nav-height);
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 2rem;
  background: rgba(11, 11, 13, 0.88);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--border);
  z-index: 100;
}

.logo {
  font-family: var(--font-display);
  font-size: var(--text-lg);
  font-weight: 700;
  letter-spacing: 0.04em;
}

.nav-links {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav-link {
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--accent);
}

.hamburger {
  display: none;
  flex-direction: column;
  gap: 5px;
  padding: 0.5rem;
}

.hamburger-bar {
  display: block;
  width: 24px;
  height: 2px;
  background: var(--text-primary);
}

.close-btn {
  display: none;
  position: absolute;
  top: 1.25rem;
  right: 1.5rem;
  font-size: var(--text-xl);
  line-height: 1;
}

/* === Hero === */
.hero {
  min-height: 80vh;
  display: flex;
  align-items: center;
  padding: calc(var(--nav-height) + 2rem) 2rem 2rem;
}

.hero-title {
  font-family: var(--font-display);
  font-size: var(--text-3xl);
  line-height: 1.1;
}

.typing {
  color: var(--accent);
}

.cursor {
  display: inline-block;
  width: 3px;
  margin-left: 4px;
  background: var(--accent);
  animation: blink 1s step-end infinite;
}

@keyframes blink {
  50% { opacity: 0; }
}

/* === Projects === */
.projects {
  padding: 4rem 2rem;
}

.section-title {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  margin-bottom: 1.5rem;
}

.categories {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
  margin-bottom: 2rem;
}

.category {
  padding: 0.4rem 1rem;
  border: 1px solid var(--border);
  border-radius: 999px;
  color: var(--text-secondary);
  font-size: var(--text-sm);
  transition: all var(--transition-fast);
}

.category:hover {
  border-color: var(--accent);
  color: var(--text-primary);
}

.category.active {
  background: var(--accent);
  border-color: var(--accent);
  color: var(--bg);
}

.projects-list {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 1.5rem;
}

.projects-empty {
  color: var(--text-muted);
}

.project {
  position: relative;
  min-height: 320px;
  display: flex;
  align-items: flex-end;
  border-radius: 12px;
  overflow: hidden;
  background-color: var(--bg-raised);
  background-size: cover;
  background-position: center;
  cursor: pointer;
  transition: transform var(--transition-normal);
}

.project::before {
  content: '';
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.85), transparent 60%);
}

.project:hover,
.project:focus-visible {
  transform: translateY(-4px);
}

.project:focus-visible {
  outline: 2px solid var(--accent);
  outline-offset: 2px;
}

.card-body {
  position: relative;
  width: 100%;
  padding: 1.25rem;
}

.card-body h3 {
  font-family: var(--font-display);
  font-size: var(--text-lg);
}

.card-body p {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.category-label {
  display: inline-block;
  margin-bottom: 0.5rem;
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--accent);
}

/* === Audio Players === */
.play-btn,
.play-btn-large {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: var(--accent);
  color: var(--bg);
  transition: box-shadow var(--transition-fast);
}

.play-btn {
  width: 40px;
  height: 40px;
  margin-top: 0.75rem;
}

.play-btn-large {
  width: 56px;
  height: 56px;
}

.play-btn:hover,
.play-btn-large:hover {
  box-shadow: 0 0 16px var(--accent-glow);
}

.music-progress-bar {
  position: relative;
  width: 100%;
  height: 4px;
  margin-top: 0.75rem;
  background: var(--border);
  border-radius: 2px;
  cursor: pointer;
}

.music-progress-bar.large {
  height: 6px;
}

.music-progress-fill {
  height: 100%;
  width: 0%;
  background: var(--accent);
  border-radius: inherit;
}

.pause-icon,
.pause-icon-large,
.playing .play-icon,
.playing .play-icon-large {
  display: none;
}

.playing .pause-icon,
.playing .pause-icon-large {
  display: inline-flex;
}

.audio-section {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin: 1.5rem 0;
}

/* === Contact === */
.contact {
  padding: 4rem 2rem 6rem;
  text-align: center;
}

.contact-text {
  color: var(--text-secondary);
  margin-bottom: 1.5rem;
}

.btn-copy,
.btn-link {
  display: inline-block;
  padding: 0.75rem 1.5rem;
  border: 1px solid var(--accent);
  border-radius: 8px;
  color: var(--accent);
  transition: all var(--transition-fast);
}

.btn-copy:hover,
.btn-link:hover {
  background: var(--accent);
  color: var(--bg);
}

.copy-feedback {
  display: block;
  margin-top: 0.75rem;
  color: var(--accent);
  font-size: var(--text-sm);
}

/* === Project Detail === */
.project-detail {
  max-width: 1100px;
  margin: 0 auto;
  padding: calc(var(--nav-height) + 2rem) 2rem 4rem;
}

.loading-text {
  color: var(--text-muted);
}

.back-btn {
  display: inline-block;
  margin-bottom: 1.5rem;
  color: var(--text-secondary);
}

.back-btn:hover {
  color: var(--accent);
}

.project-info {
  margin-top: 2rem;
}

.project-category {
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.08em;
  color: var(--accent);
}

.project-title {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  margin: 0.5rem 0 1rem;
}

.project-description {
  color: var(--text-secondary);
  max-width: 70ch;
}

.detail-section {
  margin-top: 2rem;
}

.detail-section h3 {
  font-family: var(--font-display);
  margin-bottom: 0.75rem;
}

.tech-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.tech-tag {
  padding: 0.25rem 0.75rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 999px;
  font-size: var(--text-sm);
}

.features-list {
  padding-left: 1.25rem;
  color: var(--text-secondary);
}

.project-links {
  display: flex;
  gap: 1rem;
  margin-top: 2rem;
}

/* === Sliders === */
.project-slider,
.video-slider {
  position: relative;
  border-radius: 12px;
  overflow: hidden;
  background: var(--bg-raised);
  outline: none;
}

.project-slider:focus-visible,
.video-slider:focus-visible {
  box-shadow: 0 0 0 2px var(--accent-glow);
}

.slider-viewport {
  overflow: hidden;
}

.slider-track,
.video-slider-track {
  display: flex;
  transition: transform var(--transition-slide);
}

.slider-slide,
.video-slider-slide {
  flex: 0 0 100%;
}

.slider-slide img {
  display: block;
  width: 100%;
  max-height: 70vh;
  object-fit: cover;
}

.video-slider-slide video,
.video-slider-slide iframe,
.project-video-container video,
.project-video-container iframe {
  display: block;
  width: 100%;
  border: 0;
}

.project-video-container {
  margin-top: 1.5rem;
  border-radius: 12px;
  overflow: hidden;
}

.slider-arrow,
.video-slider-arrow {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  width: 44px;
  height: 44px;
  border-radius: 50%;
  background: rgba(0, 0, 0, 0.55);
  font-size: var(--text-lg);
  z-index: 2;
}

.slider-prev,
.video-slider-prev {
  left: 1rem;
}

.slider-next,
.video-slider-next {
  right: 1rem;
}

.slider-dots,
.video-slider-dots {
  position: absolute;
  bottom: 1rem;
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  gap: 0.5rem;
  z-index: 2;
}

.slider-dot,
.video-slider-dot {
  width: 10px;
  height: 10px;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.4);
}

.slider-dot.active,
.video-slider-dot.active {
  background: var(--accent);
}

/* === Responsive === */
@media (max-width: 768px) {
  .hamburger {
    display: flex;
  }

  .nav-links {
    position: fixed;
    inset: 0;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    background: var(--bg);
    transform: translateX(100%);
    transition: transform var(--transition-normal);
  }

  .nav-links.open {
    transform: translateX(0);
  }

  .nav-links.open .close-btn {
    display: block;
  }

  .hero-title {
    font-size: var(--text-2xl);
  }

  .projects-list {
    grid-template-columns: 1fr;
  }
}
"#;
