use crate::models::{Mood, Theme};
use crate::quotes::Quote;
use crate::streak::SIDEBAR_BADGE_LIMIT;

pub fn render_index(theme: Theme, quote: &Quote) -> String {
    INDEX_HTML
        .replace("{{THEME}}", theme.as_str())
        .replace("{{MOOD_BUTTONS}}", &mood_buttons())
        .replace("{{QUOTE_TEXT}}", &escape_html(quote.text))
        .replace("{{QUOTE_AUTHOR}}", &escape_html(quote.author))
        .replace("{{SIDEBAR_BADGES}}", &SIDEBAR_BADGE_LIMIT.to_string())
}

fn mood_buttons() -> String {
    Mood::ALL
        .iter()
        .map(|mood| {
            format!(
                r#"<form method="post" action="/checkin/{value}"><button class="mood mood-{value}" type="submit" data-mood="{value}"><span class="emoji">{emoji}</span><span>{label}</span></button></form>"#,
                value = mood.as_str(),
                emoji = mood.emoji(),
                label = mood.label(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en" class="{{THEME}}">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Wellness Monitor</title>
  <style>
    :root {
      --bg: #f6f7fb;
      --card: #ffffff;
      --ink: #1f2430;
      --muted: #6b7280;
      --accent: #7c5cff;
      --positive: #22c55e;
      --negative: #ef4444;
      --neutral: #6b7280;
      --shadow: 0 18px 40px rgba(31, 36, 48, 0.08);
    }

    html.dark {
      --bg: #12141c;
      --card: #1c1f2b;
      --ink: #e8eaf2;
      --muted: #9aa0b4;
      --shadow: 0 18px 40px rgba(0, 0, 0, 0.4);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
      display: flex;
      min-height: 100vh;
    }

    aside {
      width: 300px;
      padding: 24px;
      background: var(--card);
      box-shadow: var(--shadow);
      display: grid;
      gap: 18px;
      align-content: start;
      transition: width 300ms ease;
    }

    aside.collapsed { width: 64px; overflow: hidden; }
    aside.collapsed .hide-collapsed { display: none; }

    main {
      flex: 1;
      padding: 32px;
      display: grid;
      gap: 24px;
      max-width: 1100px;
    }

    .card {
      background: var(--card);
      border-radius: 18px;
      padding: 24px;
      box-shadow: var(--shadow);
    }

    h1, h2, h3 { margin: 0 0 12px; }
    .muted { color: var(--muted); }

    .moods {
      display: grid;
      grid-template-columns: repeat(2, 1fr);
      gap: 16px;
    }

    .mood {
      width: 100%;
      border: none;
      border-radius: 16px;
      padding: 20px;
      font-size: 1.1rem;
      font-weight: 600;
      color: #fff;
      cursor: pointer;
      display: flex;
      flex-direction: column;
      align-items: center;
      gap: 8px;
    }

    .mood:disabled { opacity: 0.6; cursor: wait; }
    .mood .emoji { font-size: 2.2rem; }
    .mood-happy { background: #4ade80; }
    .mood-sad { background: #60a5fa; }
    .mood-stressed { background: #f87171; }
    .mood-neutral { background: #a1a1aa; }

    .summary {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 12px;
      text-align: center;
    }

    .summary strong { display: block; font-size: 1.6rem; }
    .positive { color: var(--positive); }
    .negative { color: var(--negative); }
    .neutral { color: var(--neutral); }

    .badge {
      display: flex;
      gap: 12px;
      align-items: center;
      padding: 10px 12px;
      border-radius: 12px;
      background: rgba(124, 92, 255, 0.08);
      margin-bottom: 8px;
    }

    .bar-row { display: flex; align-items: center; gap: 10px; margin: 6px 0; }
    .bar-row span { width: 80px; }
    .bar { height: 12px; border-radius: 6px; background: var(--accent); }

    #chart { width: 100%; height: 220px; }
    .chart-line { fill: none; stroke: var(--accent); stroke-width: 3; }
    .chart-point { fill: var(--accent); }
    .chart-label { font-size: 11px; fill: var(--muted); }

    .toolbar { display: flex; gap: 8px; flex-wrap: wrap; }
    .toolbar button {
      border: 1px solid rgba(124, 92, 255, 0.4);
      background: transparent;
      color: var(--ink);
      border-radius: 999px;
      padding: 8px 14px;
      cursor: pointer;
    }

    #notice { min-height: 1.2em; font-weight: 600; }
    #notice[data-type="error"] { color: var(--negative); }
    #notice[data-type="ok"] { color: var(--positive); }

    ul.recent { list-style: none; padding: 0; margin: 0; display: grid; gap: 10px; }
    ul.recent li { display: flex; justify-content: space-between; }
  </style>
</head>
<body>
  <aside id="sidebar">
    <div class="toolbar">
      <button id="collapse" type="button" title="Toggle navigation">☰</button>
      <button id="theme" type="button" class="hide-collapsed">Toggle theme</button>
    </div>
    <div class="hide-collapsed">
      <h3>🔥 <span id="sidebar-streak">0</span> day streak</h3>
      <div id="sidebar-badges"></div>
    </div>
  </aside>

  <main>
    <section class="card">
      <h1>How are you feeling today?</h1>
      <p class="muted">Track your daily mood &amp; boost your wellness 🌱</p>
      <div class="moods">
        {{MOOD_BUTTONS}}
      </div>
      <p id="notice" aria-live="polite"></p>
    </section>

    <section class="card" id="result" hidden>
      <h2>Your latest check-in</h2>
      <p>Sentiment: <strong id="result-sentiment"></strong></p>
      <p id="result-recommendation"></p>
    </section>

    <section class="card">
      <div class="toolbar">
        <h2 style="flex:1">📊 Analytics</h2>
        <span class="muted" id="tracked">0 moods tracked</span>
        <button id="export" type="button">Export Data</button>
      </div>
      <svg id="chart" viewBox="0 0 600 220" role="img" aria-label="Mood over time"></svg>
      <div id="distribution"></div>
    </section>

    <section class="card">
      <h2>Summary</h2>
      <div class="summary">
        <div><strong class="positive" id="pct-positive">0%</strong>Positive</div>
        <div><strong class="negative" id="pct-negative">0%</strong>Negative</div>
        <div><strong class="neutral" id="pct-neutral">0%</strong>Neutral</div>
      </div>
    </section>

    <section class="card">
      <h2>Streak &amp; achievements</h2>
      <p><strong id="streak">0 Days</strong> <span class="muted">current streak</span></p>
      <div id="badges"></div>
      <p class="muted" id="journey"></p>
    </section>

    <section class="card">
      <h2>Recent mood entries</h2>
      <ul class="recent" id="recent"></ul>
    </section>

    <section class="card">
      <div class="toolbar">
        <blockquote style="flex:1;margin:0">
          <p id="quote-text">"{{QUOTE_TEXT}}"</p>
          <cite class="muted" id="quote-author">{{QUOTE_AUTHOR}}</cite>
        </blockquote>
        <button id="quote" type="button" title="Get new quote">↻</button>
      </div>
    </section>
  </main>

  <script>
    const SIDEBAR_BADGES = {{SIDEBAR_BADGES}};
    const MOOD_LABELS = ['', 'Stressed', 'Sad', 'Neutral', 'Happy'];
    const noticeEl = document.getElementById('notice');
    const moodButtons = Array.from(document.querySelectorAll('.mood'));

    const capitalize = (value) => value.charAt(0).toUpperCase() + value.slice(1);

    const setNotice = (message, type) => {
      noticeEl.textContent = message;
      noticeEl.dataset.type = type || '';
    };

    const renderBadges = (container, badges) => {
      container.innerHTML = badges
        .map((badge) => `<div class="badge"><span>${badge.emoji}</span><div><strong>${badge.name}</strong><div class="muted">${badge.description}</div></div></div>`)
        .join('');
    };

    const renderChart = (series) => {
      const chart = document.getElementById('chart');
      if (!series.length) {
        chart.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No mood entries yet</text>';
        return;
      }
      const width = 600;
      const height = 220;
      const pad = 40;
      const step = series.length > 1 ? (width - pad * 2) / (series.length - 1) : 0;
      const x = (i) => pad + i * step;
      const y = (v) => height - pad - ((v - 1) / 3) * (height - pad * 2);
      const path = series.map((p, i) => `${i ? 'L' : 'M'} ${x(i)} ${y(p.mood_value)}`).join(' ');
      const grid = [1, 2, 3, 4]
        .map((v) => `<text class="chart-label" x="${pad - 6}" y="${y(v) + 4}" text-anchor="end">${MOOD_LABELS[v]}</text>`)
        .join('');
      const points = series
        .map((p, i) => `<circle class="chart-point" cx="${x(i)}" cy="${y(p.mood_value)}" r="4"><title>${p.day} · ${p.date}</title></circle>`)
        .join('');
      chart.innerHTML = `${grid}<path class="chart-line" d="${path}" />${points}`;
    };

    const renderDistribution = (distribution, total) => {
      const rows = Object.entries(distribution)
        .map(([mood, count]) => {
          const pct = total ? Math.round((count / total) * 100) : 0;
          return `<div class="bar-row"><span>${capitalize(mood)}</span><div class="bar mood-${mood}" style="width:${pct * 3}px"></div><small>${pct}%</small></div>`;
        })
        .join('');
      document.getElementById('distribution').innerHTML = rows;
    };

    const renderDashboard = (data) => {
      const total = data.total_entries;
      document.getElementById('tracked').textContent = `${total} mood${total !== 1 ? 's' : ''} tracked`;
      document.getElementById('pct-positive').textContent = `${data.percentages.positive}%`;
      document.getElementById('pct-negative').textContent = `${data.percentages.negative}%`;
      document.getElementById('pct-neutral').textContent = `${data.percentages.neutral}%`;

      const streak = data.streak.streak;
      document.getElementById('streak').textContent = `${streak} Day${streak !== 1 ? 's' : ''}`;
      document.getElementById('sidebar-streak').textContent = streak;
      renderBadges(document.getElementById('badges'), data.streak.badges);
      renderBadges(document.getElementById('sidebar-badges'), data.streak.badges.slice(0, SIDEBAR_BADGES));
      document.getElementById('journey').textContent = data.journey_message;

      renderChart(data.series);
      renderDistribution(data.distribution, total);

      document.getElementById('recent').innerHTML = data.recent
        .map((entry) => `<li><span>${capitalize(entry.mood)} · <span class="${entry.sentiment}">${capitalize(entry.sentiment)}</span></span><span class="muted">${new Date(entry.timestamp).toLocaleString()}</span></li>`)
        .join('');
    };

    const showResult = (entry) => {
      document.getElementById('result').hidden = false;
      const sentimentEl = document.getElementById('result-sentiment');
      sentimentEl.textContent = capitalize(entry.sentiment);
      sentimentEl.className = entry.sentiment;
      document.getElementById('result-recommendation').textContent = entry.recommendation;
    };

    const refresh = async () => {
      const res = await fetch('/api/dashboard');
      if (res.ok) {
        renderDashboard(await res.json());
      }
    };

    moodButtons.forEach((button) => {
      button.form.addEventListener('submit', async (event) => {
        event.preventDefault();
        moodButtons.forEach((b) => { b.disabled = true; });
        setNotice('Analyzing your mood...', '');
        try {
          const res = await fetch('/api/moods', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({ mood: button.dataset.mood }),
          });
          if (!res.ok) {
            throw new Error(await res.text());
          }
          showResult(await res.json());
          setNotice('Mood recorded successfully!', 'ok');
          await refresh();
        } catch (err) {
          setNotice(err.message || 'Could not record mood', 'error');
        } finally {
          moodButtons.forEach((b) => { b.disabled = false; });
        }
      });
    });

    document.getElementById('export').addEventListener('click', async () => {
      const res = await fetch('/api/export');
      if (!res.ok) {
        setNotice(await res.text(), 'error');
        return;
      }
      const disposition = res.headers.get('Content-Disposition') || '';
      const match = disposition.match(/filename="([^"]+)"/);
      const url = URL.createObjectURL(await res.blob());
      const link = document.createElement('a');
      link.href = url;
      link.download = match ? match[1] : 'wellness-data.json';
      document.body.appendChild(link);
      link.click();
      link.remove();
      URL.revokeObjectURL(url);
      setNotice('Data exported successfully!', 'ok');
    });

    document.getElementById('theme').addEventListener('click', async () => {
      const res = await fetch('/api/theme/toggle', { method: 'POST' });
      if (res.ok) {
        const data = await res.json();
        document.documentElement.className = data.theme;
      }
    });

    document.getElementById('collapse').addEventListener('click', () => {
      document.getElementById('sidebar').classList.toggle('collapsed');
    });

    document.getElementById('quote').addEventListener('click', async () => {
      const res = await fetch('/api/quote');
      if (res.ok) {
        const quote = await res.json();
        document.getElementById('quote-text').textContent = `"${quote.text}"`;
        document.getElementById('quote-author').textContent = quote.author;
      }
    });

    refresh();
  </script>
</body>
</html>
"#;
