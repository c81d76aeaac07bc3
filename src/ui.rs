pub fn render_index(today: &str) -> String {
    INDEX_HTML.replace("{{TODAY}}", today)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Gym Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #27ae60;
      --accent-2: #2f4858;
      --rest: #2980b9;
      --missed: #ecf0f1;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    [hidden] {
      display: none !important;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.3rem;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #6b645d;
      box-shadow: none;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    form {
      display: grid;
      gap: 10px;
      max-width: 340px;
    }

    input[type="text"],
    input[type="password"],
    input[type="date"],
    input[type="number"] {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      padding: 10px 12px;
      font-size: 1rem;
      font-family: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 8px;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(39, 174, 96, 0.3);
    }

    .btn-secondary {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
    }

    .btn-ghost {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    .btn-danger {
      background: #c63b2b;
      color: white;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.95rem;
    }

    th, td {
      text-align: left;
      padding: 8px 10px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
    }

    td input[type="number"] {
      width: 76px;
      padding: 6px 8px;
    }

    .cal-nav {
      display: flex;
      align-items: center;
      justify-content: space-between;
      margin-bottom: 12px;
    }

    .cal-nav button {
      padding: 6px 12px;
    }

    .calendar {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .cal-head {
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: #8b857d;
      text-align: center;
      padding-bottom: 4px;
    }

    .cal-cell {
      border-radius: 12px;
      min-height: 56px;
      padding: 6px 8px;
      background: var(--missed);
      display: grid;
      align-content: start;
      gap: 2px;
    }

    .cal-cell.workout {
      background: var(--accent);
      color: white;
    }

    .cal-cell.rest {
      background: var(--rest);
      color: white;
    }

    .cal-cell .num {
      font-size: 0.72rem;
      opacity: 0.8;
    }

    .cal-cell .tag {
      font-size: 0.74rem;
      font-weight: 600;
    }

    .summary-grid {
      display: grid;
      grid-template-columns: auto 1fr;
      gap: 20px;
      align-items: center;
    }

    .legend {
      display: grid;
      gap: 8px;
      font-size: 0.95rem;
    }

    .legend .dot {
      display: inline-block;
      width: 12px;
      height: 12px;
      border-radius: 50%;
      margin-right: 8px;
    }

    .actions-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 10px;
    }

    .editor-head {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      margin-bottom: 14px;
    }

    .row {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
      margin-top: 14px;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 640px) {
      .app {
        padding: 28px 22px;
      }
      .summary-grid {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1 id="title">Gym Tracker</h1>
      <button class="btn-ghost" id="logout-btn" hidden type="button">Log out</button>
    </header>

    <section id="auth-view">
      <div class="card" style="margin-bottom: 18px;">
        <h2>Leaderboard</h2>
        <table>
          <thead>
            <tr><th>#</th><th>User</th><th>Workout days</th></tr>
          </thead>
          <tbody id="leader-body">
            <tr><td colspan="3">Loading...</td></tr>
          </tbody>
        </table>
      </div>

      <div class="card">
        <div class="tabs" role="tablist" style="margin-bottom: 16px;">
          <button class="tab active" type="button" data-tab="login" role="tab">Login</button>
          <button class="tab" type="button" data-tab="signup" role="tab">Sign Up</button>
        </div>

        <form id="login-form">
          <input type="text" id="login-user" placeholder="Username" autocomplete="username" />
          <input type="password" id="login-pass" placeholder="Password" autocomplete="current-password" />
          <button class="btn-primary" type="submit">Login</button>
        </form>

        <form id="signup-form" hidden>
          <input type="text" id="signup-user" placeholder="New username" autocomplete="username" />
          <input type="password" id="signup-pass" placeholder="New password" autocomplete="new-password" />
          <button class="btn-secondary" type="submit">Create account</button>
        </form>
      </div>
    </section>

    <section id="app-view" hidden>
      <div class="card" style="margin-bottom: 18px;">
        <div class="cal-nav">
          <button class="btn-ghost" id="cal-prev" type="button">&#8592;</button>
          <h2 id="cal-title"></h2>
          <button class="btn-ghost" id="cal-next" type="button">&#8594;</button>
        </div>
        <div class="calendar" id="calendar"></div>
      </div>

      <div class="card" style="margin-bottom: 18px;">
        <h2>Consistency</h2>
        <div class="summary-grid" id="summary-grid">
          <svg id="donut" width="180" height="180" viewBox="0 0 180 180" role="img" aria-label="Consistency chart"></svg>
          <div class="legend" id="summary-legend"></div>
        </div>
        <p class="hint" id="summary-caption"></p>
      </div>

      <div class="card">
        <div class="editor-head">
          <h2>Edit Log</h2>
          <input type="date" id="log-date" value="{{TODAY}}" />
        </div>
        <div id="editor"></div>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const TEMPLATES = ['Anterior A', 'Anterior B', 'Posterior A', 'Posterior B'];
    const WEEKDAYS = ['Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat', 'Sun'];
    const MONTHS = ['January', 'February', 'March', 'April', 'May', 'June',
      'July', 'August', 'September', 'October', 'November', 'December'];

    const statusEl = document.getElementById('status');
    const authView = document.getElementById('auth-view');
    const appView = document.getElementById('app-view');
    const titleEl = document.getElementById('title');
    const logoutBtn = document.getElementById('logout-btn');
    const dateInput = document.getElementById('log-date');
    const editorEl = document.getElementById('editor');
    const calendarEl = document.getElementById('calendar');
    const calTitleEl = document.getElementById('cal-title');

    let currentUser = null;
    let calYear = null;
    let calMonth = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      const text = await res.text();
      return text ? JSON.parse(text) : null;
    };

    const postJson = (path, body) => api(path, {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(body)
    });

    const loadLeaderboard = async () => {
      const body = document.getElementById('leader-body');
      try {
        const entries = await api('/api/leaderboard');
        if (!entries.length) {
          body.innerHTML = '<tr><td colspan="3">No workouts logged yet.</td></tr>';
          return;
        }
        body.innerHTML = entries
          .map((entry, i) => `<tr><td>${i + 1}</td><td>${escapeHtml(entry.username)}</td><td>${entry.workout_days}</td></tr>`)
          .join('');
      } catch (err) {
        body.innerHTML = '<tr><td colspan="3">Leaderboard unavailable.</td></tr>';
        setStatus('Could not load leaderboard. ' + err.message, 'error');
      }
    };

    const escapeHtml = (text) => {
      const div = document.createElement('div');
      div.textContent = text;
      return div.innerHTML;
    };

    const renderCalendar = (data) => {
      calYear = data.year;
      calMonth = data.month;
      calTitleEl.textContent = `${MONTHS[data.month - 1]} ${data.year}`;

      let html = WEEKDAYS.map((day) => `<div class="cal-head">${day}</div>`).join('');
      if (data.cells.length) {
        const offset = WEEKDAYS.indexOf(data.cells[0].weekday);
        for (let i = 0; i < offset; i += 1) {
          html += '<div></div>';
        }
      }
      html += data.cells
        .map((cell) => {
          const cls = cell.state === 'Workout' ? 'workout' : cell.state === 'Rest' ? 'rest' : '';
          return `<div class="cal-cell ${cls}" data-date="${cell.date}">` +
            `<span class="num">${cell.day}</span>` +
            `<span class="tag">${escapeHtml(cell.label)}</span></div>`;
        })
        .join('');
      calendarEl.innerHTML = html;

      calendarEl.querySelectorAll('.cal-cell').forEach((el) => {
        el.addEventListener('click', () => {
          dateInput.value = el.dataset.date;
          loadEditor().catch((err) => setStatus(err.message, 'error'));
        });
      });
    };

    const loadCalendar = async () => {
      const query = calYear ? `?year=${calYear}&month=${calMonth}` : '';
      const data = await api(`/api/calendar/${encodeURIComponent(currentUser)}${query}`);
      renderCalendar(data);
    };

    const shiftMonth = (delta) => {
      if (!calYear) {
        return;
      }
      calMonth += delta;
      if (calMonth < 1) {
        calMonth = 12;
        calYear -= 1;
      } else if (calMonth > 12) {
        calMonth = 1;
        calYear += 1;
      }
      loadCalendar().catch((err) => setStatus(err.message, 'error'));
    };

    const renderDonut = (summary) => {
      const donut = document.getElementById('donut');
      const segments = [
        { label: 'Workouts', value: summary.workouts, color: '#27ae60' },
        { label: 'Rest', value: summary.rest, color: '#2980b9' },
        { label: 'Missed', value: summary.missed, color: '#bdc3c7' }
      ];
      const total = summary.total_days;
      const radius = 62;
      const circumference = 2 * Math.PI * radius;
      let offset = 0;

      donut.innerHTML = segments
        .filter((segment) => segment.value > 0)
        .map((segment) => {
          const length = (segment.value / total) * circumference;
          const circle = `<circle cx="90" cy="90" r="${radius}" fill="none"` +
            ` stroke="${segment.color}" stroke-width="28"` +
            ` stroke-dasharray="${length} ${circumference - length}"` +
            ` stroke-dashoffset="${-offset}"` +
            ` transform="rotate(-90 90 90)" />`;
          offset += length;
          return circle;
        })
        .join('');

      document.getElementById('summary-legend').innerHTML = segments
        .map((segment) => `<div><span class="dot" style="background:${segment.color}"></span>` +
          `${segment.label}: <strong>${segment.value}</strong></div>`)
        .join('');
    };

    const loadSummary = async () => {
      const summary = await api(`/api/summary/${encodeURIComponent(currentUser)}`);
      const caption = document.getElementById('summary-caption');
      const grid = document.getElementById('summary-grid');
      if (!summary) {
        grid.hidden = true;
        caption.textContent = 'Start working out to see your chart!';
        return;
      }
      grid.hidden = false;
      renderDonut(summary);
      caption.textContent = `Tracking ${summary.total_days} days (${summary.range_start} to ${summary.range_end}).`;
    };

    const renderEmptyEditor = () => {
      const templateButtons = TEMPLATES
        .map((name) => `<button class="btn-secondary" type="button" data-template="${name}">${name}</button>`)
        .join('');
      editorEl.innerHTML =
        `<div class="row"><button class="btn-ghost" id="rest-btn" type="button">Mark Rest</button></div>` +
        `<p class="hint" style="margin-top: 14px;">Or start a workout:</p>` +
        `<div class="actions-grid" style="margin-top: 10px;">${templateButtons}</div>`;

      document.getElementById('rest-btn').addEventListener('click', () => {
        saveLog('Rest', []).catch((err) => setStatus(err.message, 'error'));
      });
      editorEl.querySelectorAll('[data-template]').forEach((el) => {
        el.addEventListener('click', () => {
          startTemplate(el.dataset.template).catch((err) => setStatus(err.message, 'error'));
        });
      });
    };

    const renderRestEditor = () => {
      editorEl.innerHTML =
        `<p class="hint">Rest day.</p>` +
        `<div class="row"><button class="btn-danger" id="delete-btn" type="button">Delete</button></div>`;
      document.getElementById('delete-btn').addEventListener('click', () => {
        deleteLog().catch((err) => setStatus(err.message, 'error'));
      });
    };

    const renderWorkoutEditor = (log) => {
      const rows = log.exercises
        .map((entry, i) =>
          `<tr data-row="${i}"><td>${escapeHtml(entry.name)}</td>` +
          `<td><input type="number" min="1" max="10" value="${entry.sets}" data-field="sets" /></td>` +
          `<td><input type="number" min="1" max="100" value="${entry.reps}" data-field="reps" /></td>` +
          `<td><input type="number" min="0" max="500" step="0.5" value="${entry.weight}" data-field="weight" /></td></tr>`)
        .join('');
      editorEl.innerHTML =
        `<p class="hint">${escapeHtml(log.log_type)}</p>` +
        `<table style="margin-top: 10px;"><thead>` +
        `<tr><th>Exercise</th><th>Sets</th><th>Reps</th><th>Weight</th></tr>` +
        `</thead><tbody id="exercise-body">${rows}</tbody></table>` +
        `<div class="row">` +
        `<button class="btn-primary" id="save-btn" type="button">Save</button>` +
        `<button class="btn-danger" id="delete-btn" type="button">Delete</button>` +
        `</div>`;

      document.getElementById('save-btn').addEventListener('click', () => {
        const exercises = log.exercises.map((entry, i) => {
          const row = editorEl.querySelector(`tr[data-row="${i}"]`);
          return {
            name: entry.name,
            sets: parseInt(row.querySelector('[data-field="sets"]').value, 10) || 0,
            reps: parseInt(row.querySelector('[data-field="reps"]').value, 10) || 0,
            weight: parseFloat(row.querySelector('[data-field="weight"]').value) || 0
          };
        });
        saveLog(log.log_type, exercises).catch((err) => setStatus(err.message, 'error'));
      });
      document.getElementById('delete-btn').addEventListener('click', () => {
        deleteLog().catch((err) => setStatus(err.message, 'error'));
      });
    };

    const loadEditor = async () => {
      const date = dateInput.value;
      const log = await api(`/api/log/${encodeURIComponent(currentUser)}/${date}`);
      if (!log) {
        renderEmptyEditor();
      } else if (log.log_type === 'Rest') {
        renderRestEditor();
      } else {
        renderWorkoutEditor(log);
      }
    };

    const refreshApp = async () => {
      await Promise.all([loadCalendar(), loadSummary(), loadEditor()]);
    };

    const saveLog = async (logType, exercises) => {
      setStatus('Saving...', '');
      await postJson('/api/log', {
        username: currentUser,
        date: dateInput.value,
        log_type: logType,
        exercises
      });
      setStatus('Saved', 'ok');
      await refreshApp();
    };

    const startTemplate = async (template) => {
      setStatus('Saving...', '');
      await postJson('/api/log/template', {
        username: currentUser,
        date: dateInput.value,
        template
      });
      setStatus('Saved', 'ok');
      await refreshApp();
    };

    const deleteLog = async () => {
      await api(`/api/log/${encodeURIComponent(currentUser)}/${dateInput.value}`, { method: 'DELETE' });
      setStatus('Deleted', 'ok');
      await refreshApp();
    };

    const enterApp = (username) => {
      currentUser = username;
      calYear = null;
      calMonth = null;
      titleEl.textContent = username;
      authView.hidden = true;
      appView.hidden = false;
      logoutBtn.hidden = false;
      setStatus('', '');
      refreshApp().catch((err) => setStatus(err.message, 'error'));
    };

    logoutBtn.addEventListener('click', () => {
      currentUser = null;
      titleEl.textContent = 'Gym Tracker';
      appView.hidden = true;
      authView.hidden = false;
      logoutBtn.hidden = true;
      loadLeaderboard();
    });

    document.querySelectorAll('.tab').forEach((button) => {
      button.addEventListener('click', () => {
        document.querySelectorAll('.tab').forEach((tab) => {
          tab.classList.toggle('active', tab === button);
        });
        document.getElementById('login-form').hidden = button.dataset.tab !== 'login';
        document.getElementById('signup-form').hidden = button.dataset.tab !== 'signup';
      });
    });

    document.getElementById('login-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const username = document.getElementById('login-user').value;
      const password = document.getElementById('login-pass').value;
      postJson('/api/login', { username, password })
        .then((data) => enterApp(data.username))
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('signup-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const username = document.getElementById('signup-user').value;
      const password = document.getElementById('signup-pass').value;
      postJson('/api/register', { username, password })
        .then(() => setStatus('Account created. Login now.', 'ok'))
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('cal-prev').addEventListener('click', () => shiftMonth(-1));
    document.getElementById('cal-next').addEventListener('click', () => shiftMonth(1));
    dateInput.addEventListener('change', () => {
      if (currentUser) {
        loadEditor().catch((err) => setStatus(err.message, 'error'));
      }
    });

    loadLeaderboard();
  </script>
</body>
</html>
"##;
