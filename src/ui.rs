use crate::controller::{Dashboard, LoadStatus};
use crate::render::escape_text;

pub fn render_index(dashboard: &Dashboard) -> String {
    let status = match dashboard.status() {
        LoadStatus::Loading => "loading",
        LoadStatus::Ready { .. } => "ready",
        LoadStatus::Failed { .. } => "failed",
    };
    INDEX_HTML
        .replace("{{NAV}}", &render_nav(dashboard))
        .replace("{{TIMEFRAME}}", &escape_text(dashboard.selected()))
        .replace("{{STATUS}}", status)
        .replace("{{GRID}}", dashboard.grid().content())
}

fn render_nav(dashboard: &Dashboard) -> String {
    dashboard
        .selectors()
        .iter()
        .map(|selector| {
            let class = if selector.active {
                "time-link active"
            } else {
                "time-link"
            };
            format!(
                r##"<li><a href="#" class="{class}" data-timeframe="{key}">{label}</a></li>"##,
                key = escape_text(&selector.timeframe),
                label = escape_text(&selector.label),
            )
        })
        .collect::<Vec<_>>()
        .join("\n          ")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Time Tracking Dashboard</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Rubik:wght@300;400;500&display=swap');

    :root {
      --bg: #0d1323;
      --card: #1c204b;
      --card-hover: #33397a;
      --accent: #5747ea;
      --muted: #bbc0ff;
      --ink: #ffffff;
      --work: #ff8b64;
      --play: #55c2e6;
      --study: #ff5e7d;
      --exercise: #4bcf82;
      --social: #7335d2;
      --self-care: #f1c75b;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Rubik", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .dashboard {
      width: min(1110px, 100%);
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
      gap: 30px;
    }

    .profile {
      background: var(--card);
      border-radius: 15px;
      overflow: hidden;
    }

    .profile header {
      background: var(--accent);
      border-radius: 15px;
      padding: 32px;
    }

    .profile header p {
      margin: 0;
      color: var(--muted);
    }

    .profile h1 {
      margin: 4px 0 0;
      font-weight: 300;
      font-size: 2.5rem;
    }

    .profile nav ul {
      list-style: none;
      margin: 0;
      padding: 26px 32px 32px;
      display: grid;
      gap: 16px;
    }

    .time-link {
      color: #7078c9;
      text-decoration: none;
      font-size: 1.1rem;
      transition: color 150ms ease;
    }

    .time-link:hover,
    .time-link.active {
      color: var(--ink);
    }

    #activity-grid {
      grid-column: span 3;
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
      gap: 30px;
    }

    .activity-card {
      border-radius: 15px;
      padding-top: 38px;
      background-color: var(--card-hover);
    }

    .bg-card-work { background-color: var(--work); }
    .bg-card-play { background-color: var(--play); }
    .bg-card-study { background-color: var(--study); }
    .bg-card-exercise { background-color: var(--exercise); }
    .bg-card-social { background-color: var(--social); }
    .bg-card-self-care { background-color: var(--self-care); }

    .activity-card-content {
      background: var(--card);
      border-radius: 15px;
      padding: 30px;
      transition: background 150ms ease;
    }

    .activity-card-content:hover {
      background: var(--card-hover);
    }

    .activity-card-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
    }

    .activity-card-header h2 {
      margin: 0;
      font-size: 1.1rem;
      font-weight: 500;
    }

    .activity-card-header a {
      color: var(--muted);
      text-decoration: none;
    }

    .hours {
      margin: 24px 0 8px;
      font-size: 3.5rem;
      font-weight: 300;
    }

    .previous {
      margin: 0;
      color: var(--muted);
    }

    .loading-text,
    .error-text {
      grid-column: 1 / -1;
      margin: 0;
      padding: 32px;
      border-radius: 15px;
      background: var(--card);
      color: var(--muted);
    }

    .error-text {
      color: var(--study);
    }

    @media (max-width: 720px) {
      #activity-grid {
        grid-column: auto;
      }
      .profile h1 {
        font-size: 1.8rem;
      }
    }
  </style>
</head>
<body>
  <main class="dashboard">
    <section class="profile">
      <header>
        <p>Report for</p>
        <h1>Activity Dashboard</h1>
      </header>
      <nav>
        <ul>
          {{NAV}}
        </ul>
      </nav>
    </section>

    <section id="activity-grid" data-timeframe="{{TIMEFRAME}}" data-status="{{STATUS}}">
      {{GRID}}
    </section>
  </main>

  <script>
    const grid = document.getElementById('activity-grid');
    const links = Array.from(document.querySelectorAll('.time-link'));

    let currentView = grid.dataset.timeframe;

    const markActive = (timeframe) => {
      links.forEach((link) => link.classList.toggle('active', link.dataset.timeframe === timeframe));
      currentView = timeframe;
    };

    // The view is shared, so another visitor may have switched it.
    const applyView = (view) => {
      grid.innerHTML = view.grid;
      grid.dataset.status = view.status;
      grid.dataset.timeframe = view.timeframe;
      markActive(view.timeframe);
    };

    const selectTimeframe = async (timeframe) => {
      const res = await fetch('/api/timeframe', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ timeframe })
      });

      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }

      applyView(await res.json());
    };

    links.forEach((link) => {
      link.addEventListener('click', (event) => {
        event.preventDefault();

        const next = link.dataset.timeframe;
        if (next === currentView) {
          return;
        }

        const previous = currentView;
        markActive(next);

        selectTimeframe(next).catch((err) => {
          console.error('Could not switch timeframe:', err);
          markActive(previous);
        });
      });
    });

    // The server loads data once at startup; wait for that to settle.
    const waitForData = async () => {
      while (grid.dataset.status === 'loading') {
        await new Promise((resolve) => setTimeout(resolve, 1000));
        const res = await fetch('/api/view');
        if (res.ok) {
          applyView(await res.json());
        }
      }
    };

    waitForData().catch((err) => console.error('Could not fetch activity data:', err));
  </script>
</body>
</html>
"#;
