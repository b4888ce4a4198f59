//! UI route - single HTML page for the chromatogram viewer
//!
//! Vanilla ES6+, no frameworks. The page is a thin collaborator: all state
//! transitions happen server-side behind the JSON API.

use axum::{
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::AppState;

/// Build UI routes
pub fn ui_routes() -> Router<AppState> {
    Router::new().route("/", get(root_page))
}

/// Root page - login/signup, upload control, plot, metabolite table
async fn root_page() -> impl IntoResponse {
    Html(
        r##"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Chromaview - Total Ion Chromatogram Viewer</title>
    <style>
        body {
            font-family: system-ui, -apple-system, sans-serif;
            max-width: 900px;
            margin: 40px auto;
            padding: 20px;
            line-height: 1.6;
        }
        h1 {
            color: #333;
            border-bottom: 2px solid #0066cc;
            padding-bottom: 10px;
        }
        .tabs button {
            padding: 8px 16px;
            border: 1px solid #ccc;
            background: #f5f5f5;
            cursor: pointer;
        }
        .tabs button.active {
            background: #0066cc;
            color: white;
        }
        .panel { margin-top: 16px; }
        .panel input {
            display: block;
            margin: 8px 0;
            padding: 8px;
            width: 280px;
        }
        .button {
            padding: 8px 20px;
            background: #0066cc;
            color: white;
            border: none;
            cursor: pointer;
        }
        .message { margin: 12px 0; color: #b00020; }
        .message.ok { color: #1b7a1b; }
        table { border-collapse: collapse; margin-top: 12px; }
        th, td { border: 1px solid #ccc; padding: 6px 12px; text-align: left; }
        #plot { margin-top: 16px; }
        .hidden { display: none; }
    </style>
</head>
<body>
    <h1>Total Ion Chromatogram Viewer</h1>
    <div id="message" class="message"></div>

    <div id="auth-view">
        <div class="tabs">
            <button id="tab-login" class="active">Login</button>
            <button id="tab-signup">Sign Up</button>
        </div>
        <div id="login-panel" class="panel">
            <input id="login-username" placeholder="Username">
            <input id="login-password" type="password" placeholder="Password">
            <button class="button" id="login-button">Login</button>
        </div>
        <div id="signup-panel" class="panel hidden">
            <input id="signup-username" placeholder="Username">
            <input id="signup-password" type="password" placeholder="Password">
            <input id="signup-confirm" type="password" placeholder="Confirm Password">
            <button class="button" id="signup-button">Sign Up</button>
        </div>
    </div>

    <div id="main-view" class="hidden">
        <button class="button" id="logout-button">Logout</button>

        <h2>Upload an mzXML file</h2>
        <input type="file" id="file-input" accept=".mzXML,.mzxml">
        <button class="button" id="upload-button">Upload</button>
        <div id="plot"></div>

        <h2>Metabolite lookup</h2>
        <input id="compound-input" placeholder="Compound name">
        <button class="button" id="search-button">Search</button>
        <div id="metabolite-table"></div>
    </div>

    <script>
        let sessionId = null;

        const show = (id, visible) =>
            document.getElementById(id).classList.toggle('hidden', !visible);

        function message(text, ok = false) {
            const el = document.getElementById('message');
            el.textContent = text;
            el.className = ok ? 'message ok' : 'message';
        }

        async function api(path, options = {}) {
            options.headers = options.headers || {};
            if (sessionId) options.headers['X-Session-Id'] = sessionId;
            const resp = await fetch(path, options);
            const body = await resp.json();
            if (!resp.ok) throw new Error(body.error ? body.error.message : resp.statusText);
            return body;
        }

        document.getElementById('tab-login').addEventListener('click', () => {
            show('login-panel', true); show('signup-panel', false);
            document.getElementById('tab-login').classList.add('active');
            document.getElementById('tab-signup').classList.remove('active');
        });
        document.getElementById('tab-signup').addEventListener('click', () => {
            show('login-panel', false); show('signup-panel', true);
            document.getElementById('tab-signup').classList.add('active');
            document.getElementById('tab-login').classList.remove('active');
        });

        document.getElementById('login-button').addEventListener('click', async () => {
            try {
                const body = await api('/api/login', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({
                        username: document.getElementById('login-username').value,
                        password: document.getElementById('login-password').value,
                    }),
                });
                sessionId = body.session_id;
                show('auth-view', false); show('main-view', true);
                message('Logged in successfully!', true);
            } catch (e) { message(e.message); }
        });

        document.getElementById('signup-button').addEventListener('click', async () => {
            try {
                const body = await api('/api/signup', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({
                        username: document.getElementById('signup-username').value,
                        password: document.getElementById('signup-password').value,
                        confirm: document.getElementById('signup-confirm').value,
                    }),
                });
                message(body.message, true);
            } catch (e) { message(e.message); }
        });

        document.getElementById('logout-button').addEventListener('click', async () => {
            try { await api('/api/logout', { method: 'POST' }); } catch (e) {}
            sessionId = null;
            show('main-view', false); show('auth-view', true);
            document.getElementById('plot').innerHTML = '';
            message('');
        });

        document.getElementById('upload-button').addEventListener('click', async () => {
            const input = document.getElementById('file-input');
            if (!input.files.length) { message('Choose a file first'); return; }
            const form = new FormData();
            form.append('file', input.files[0]);
            try {
                const body = await api('/api/chromatogram', { method: 'POST', body: form });
                document.getElementById('plot').innerHTML = body.svg;
                message(`Extracted ${body.point_count} points`, true);
            } catch (e) { message(e.message); }
        });

        document.getElementById('search-button').addEventListener('click', async () => {
            const compound = document.getElementById('compound-input').value;
            try {
                const body = await api(`/api/metabolites?compound=${encodeURIComponent(compound)}`);
                const rows = body.rows.map(r =>
                    `<tr><td>${r.name}</td><td>${r.formula ?? ''}</td>` +
                    `<td>${r.monoisotopic_mass ?? ''}</td><td>${r.score ?? ''}</td></tr>`
                ).join('');
                document.getElementById('metabolite-table').innerHTML =
                    `<table><tr><th>Name</th><th>Formula</th><th>Mass</th><th>Score</th></tr>${rows}</table>`;
                message('');
            } catch (e) { message(e.message); }
        });
    </script>
</body>
</html>
"##,
    )
}
